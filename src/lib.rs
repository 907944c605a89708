#![doc = r#"
qrgen — render text into a QR code PNG.

The crate backs the `qrgen` command-line tool and can be embedded directly.
Symbol construction is delegated to the [`qrcode`] crate; this crate maps
human quality names to recovery levels, rasterizes the symbol at a fixed pixel
size, and writes it as a grayscale PNG.

Quick start: write a file
-------------------------
```rust,no_run
use std::path::Path;
use qrgen::{write_qr_file, RecoveryLevel};

fn main() -> qrgen::Result<()> {
    write_qr_file(
        "https://example.com",
        RecoveryLevel::from_quality("high"),
        512,
        Path::new("example.png"),
    )
}
```

In-memory PNG bytes
-------------------
```rust
use qrgen::{encode_png, RecoveryLevel};

let png = encode_png("hello", RecoveryLevel::Low, 256).unwrap();
assert_eq!(&png[1..4], b"PNG");
```

Sizes
-----
A positive size is the side of the image in pixels, grown to the symbol's
natural width (quiet zone included) when too small. A negative size `-n`
renders `n` pixels per module.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `RecoveryLevel` and quality-string mapping.
- [`core`] — parameter resolution and rasterization.
- [`io`] — PNG writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::api::{encode_image, encode_png, generate, write_qr_file};
pub use crate::core::params::{DEFAULT_QUALITY, DEFAULT_SIZE, QrParams, default_output_path};
pub use error::{Error, Result};
pub use types::RecoveryLevel;

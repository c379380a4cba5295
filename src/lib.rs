#![doc = r#"
autocrop — trim transparent margins from images.

This crate loads an image, normalizes it to 8-bit RGBA, finds the smallest rectangle
enclosing every pixel whose alpha is non-zero, crops to it and saves the result, by
default over the original file. It powers the `autocrop` CLI and can be embedded in
your own Rust applications.

Quick start: crop a file in place
---------------------------------
```rust,no_run
use std::path::Path;
use autocrop::{crop_to_content, CropOutcome};

fn main() -> autocrop::Result<()> {
    match crop_to_content(Path::new("assets/logo.png"))? {
        CropOutcome::Cropped { width, height, .. } => println!("now {width}x{height}"),
        CropOutcome::Empty => println!("nothing visible"),
    }
    Ok(())
}
```

Keep the original
-----------------
```rust,no_run
use std::path::Path;
use autocrop::{crop_with_params, CropParams};

fn main() -> autocrop::Result<()> {
    let params = CropParams::to_output("assets/logo.trimmed.png");
    let outcome = crop_with_params(Path::new("assets/logo.png"), &params)?;
    println!("trimmed: {}", outcome.is_trimmed());
    Ok(())
}
```

In memory
---------
```rust
use image::{DynamicImage, Rgba, RgbaImage};
use autocrop::{crop_image, BoundingBox};

let mut img = RgbaImage::new(8, 8);
img.put_pixel(3, 4, Rgba([255, 0, 0, 255]));

let (cropped, bbox) = crop_image(DynamicImage::ImageRgba8(img)).unwrap();
assert_eq!(bbox, BoundingBox::new(3, 4, 4, 5));
assert_eq!(cropped.dimensions(), (1, 1));
```

Error handling
--------------
All fallible functions return `autocrop::Result<T>`; match on `autocrop::Error` or on
[`Error::kind`] to tell a missing file from an undecodable one or a failed save.

```rust,no_run
use std::path::Path;
use autocrop::{crop_to_content, ErrorKind};

fn main() {
    if let Err(e) = crop_to_content(Path::new("missing.png")) {
        match e.kind() {
            ErrorKind::NotFound => eprintln!("no such file: {}", e.path().display()),
            other => eprintln!("{other}: {e}"),
        }
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — bounding-box detection and cropping primitives.
- [`io`] — RGBA loading and saving.
- [`types`] — `BoundingBox`, `CropOutcome`, `CropReport`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::CropParams;
pub use core::processing::bbox::content_bbox;
pub use core::processing::crop::{crop_to_bbox, trim_transparent};
pub use error::{Error, ErrorKind, Result};
pub use io::{load_rgba, save_rgba};
pub use types::{BoundingBox, CropOutcome, CropReport, CropStatus};

pub use api::{crop_image, crop_to_content, crop_to_path, crop_with_params};

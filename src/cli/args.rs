use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "autocrop",
    version,
    about = "Crop an image to its non-transparent content"
)]
pub struct CliArgs {
    /// Image to crop (overwritten in place unless --output is given)
    #[arg(value_name = "IMAGE_PATH")]
    pub input: Option<PathBuf>,

    /// Anything after the image path is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,

    /// Write the cropped image here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the outcome as a JSON object instead of a text line
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging (to stderr; filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    pub start_x: i32,

    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    pub start_y: i32,

    /// Cells whose coordinate digit sums add up to more than this are blocked
    #[arg(long, default_value_t = 25)]
    pub threshold: u32,

    /// Window width, defaults to twice the start x
    #[arg(long)]
    pub width: Option<usize>,

    /// Window height, defaults to twice the start y
    #[arg(long)]
    pub height: Option<usize>,

    #[arg(long, default_value = "anttrace.pbm")]
    pub output: PathBuf,

    #[arg(long, default_value = "stack")]
    pub algorithm: String,

    #[arg(long, default_value_t = false)]
    pub no_image: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::parse_from(["anttrace"])
    }
}

impl Config {
    /// Window size in cells, falling back to twice the start offset per axis.
    pub fn window(&self) -> (usize, usize) {
        let width = self
            .width
            .unwrap_or_else(|| (self.start_x.max(0) as usize).saturating_mul(2));
        let height = self
            .height
            .unwrap_or_else(|| (self.start_y.max(0) as usize).saturating_mul(2));
        (width, height)
    }
}

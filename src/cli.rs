//! Command-line interface. Validation happens entirely here; by the time the
//! renderer runs, every flag is a plain, known-good value.

use clap::Parser;

use crate::color::Color;
use crate::pattern::Pattern;

/// Draws recursive Sierpinski and envelope curve-stitch patterns.
#[derive(Parser, Debug)]
#[command(name = "fractal-stitch", version, about)]
pub struct Args {
    /// Recursion depth for triangle subdivision and envelope stitching
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..=12))]
    pub depth: u32,

    /// Drawing animation speed; 10 renders effectively at once
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub speed: u8,

    /// Stroke color, as a color name or #rgb / #rrggbb hex
    #[arg(long, default_value = "white")]
    pub color: Color,

    /// Canvas background color, same formats as --color
    #[arg(long, default_value = "black")]
    pub bgcolor: Color,

    /// Which composition to draw
    #[arg(long, value_enum, default_value = "sierpinski_envelope")]
    pub pattern: Pattern,
}

//! Step by step walkthrough of convolution and max pooling on a small grayscale image.
//!
//! The walkthrough has four parts:
//! * (a) convolve the image with an edge kernel, printing every window,
//! * (b) explain what that kernel highlights,
//! * (c) max pool the image, printing every window,
//! * (d) convolve with a second kernel of opposite sign pattern.

pub mod console_tracer;

use std::io::Write;
use log::debug;

use crate::{
    error::Result,
    geoalg::i32_math::matrix::Matrix,
    prettify::*,
    windows::{convolution2d::Convolution2d, max_pooling::MaxPooling, Slides}
};

use self::console_tracer::ConsoleTracer;

const RULE: &str = "----------------------------------------";

/// Everything the walkthrough operates on.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub image: Matrix,
    /// Kernel for part (a).
    pub edge_kernel: Matrix,
    /// Kernel for part (d).
    pub border_kernel: Matrix,
    pub pooling: MaxPooling,
    pub convolution_stride: usize
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            image: Matrix::new(4, 4, vec![
                1, 3, 2, 4,
                5, 6, 7, 8,
                9, 10, 11, 12,
                13, 14, 15, 16
            ]),
            edge_kernel: Matrix::new(2, 2, vec![
                -1, 0,
                0, 1
            ]),
            border_kernel: Matrix::new(2, 2, vec![
                1, -1,
                -1, 1
            ]),
            pooling: MaxPooling::default(),
            convolution_stride: 1
        }
    }
}

/// Output matrices of each computing part of the walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Part (a).
    pub edge_map: Matrix,
    /// Part (c).
    pub pooled: Matrix,
    /// Part (d).
    pub border_map: Matrix
}

/// Runs the walkthrough, writing every step to out.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DemoReport> {
    debug!("Running walkthrough on {:?} image", config.image.shape());

    writeln!(out, "{BOLD}Original matrix (image):{RESET}")?;
    writeln!(out, "{}", config.image)?;
    section_break(out)?;

    writeln!(out, "{BOLD}Part (a): Convolution with the kernel:{RESET}")?;
    writeln!(out, "{}\n", config.edge_kernel)?;
    let edge = Convolution2d::new(config.edge_kernel.clone()).with_stride(config.convolution_stride);
    let edge_map = traced(&edge, &config.image, "Starting convolution:", "Resulting convolution matrix:", out)?;
    section_break(out)?;

    writeln!(out, "{BOLD}Part (b): What the convolution does:{RESET}")?;
    writeln!(out, "{}", edge_narrative(&config.edge_kernel))?;
    section_break(out)?;

    let (size, stride) = (config.pooling.pooling_size(), config.pooling.stride());
    writeln!(out, "{BOLD}Part (c): Max pooling the original matrix with a {size}x{size} window and stride {stride}{RESET}")?;
    let pooled = traced(&config.pooling, &config.image, "Starting max pooling:", "Resulting matrix after max pooling:", out)?;
    writeln!(out, "{POOLING_NARRATIVE}")?;
    section_break(out)?;

    writeln!(out, "{BOLD}Part (d): Convolution with the edge detection kernel:{RESET}")?;
    writeln!(out, "{}\n", config.border_kernel)?;
    let border = Convolution2d::new(config.border_kernel.clone()).with_stride(config.convolution_stride);
    let border_map = traced(&border, &config.image, "Starting convolution:", "Resulting convolution matrix:", out)?;
    writeln!(out, "{}", border_narrative(&config.border_kernel))?;

    Ok(DemoReport { edge_map, pooled, border_map })
}

/// Applies operation to image, tracing each window and then the full result.
fn traced<S: Slides, W: Write>(operation: &S, image: &Matrix, start: &str, finish: &str, out: &mut W) -> Result<Matrix> {
    writeln!(out, "{BRIGHT_CYAN}{start}{RESET}")?;
    let result = operation.forward_observed(image, &mut ConsoleTracer::new(out))?;

    writeln!(out)?;
    writeln!(out, "{BRIGHT_GREEN}{finish}{RESET}")?;
    writeln!(out, "{result}")?;

    Ok(result)
}

fn section_break<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n{DIM}{RULE}{RESET}\n")?;
    Ok(())
}

/// Kernel on a single line, rows separated by semicolons: [-1 0; 0 1]
fn inline(kernel: &Matrix) -> String {
    let rows = (0..kernel.row_count())
        .map(|row| kernel.row(row).iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>();

    format!("[{}]", rows.join("; "))
}

fn edge_narrative(kernel: &Matrix) -> String {
    format!("
Convolving with the kernel {} weighs every pixel of a window and adds them up.
For the diagonal kernel the top left pixel is multiplied by -1 and the bottom right one
by +1, while the other two pixels are ignored.

Where the image has uniform intensity, such as a homogeneous crop field, neighbouring
pixels are close in value and the result stays near zero. An abrupt change in intensity,
for instance a weed whose shape or tone differs from the crop, makes the difference
between the two pixels larger. The filter therefore highlights these transitions and
helps locate areas that may contain weeds.", inline(kernel))
}

static POOLING_NARRATIVE: &str = "
Max pooling shrinks the image by keeping only the largest value of each window, which
preserves its most salient features such as edges or intensity peaks. This lowers the
complexity of the image and eases later processing without losing important information.";

fn border_narrative(kernel: &Matrix) -> String {
    format!("
The kernel {} mixes signs differently from the first one, comparing each pixel with
both its right and lower neighbours. It emphasises intensity transitions in another way
and sharpens borders further, so regions with abrupt changes, likely the outlines of
weeds, stand out even more.", inline(kernel))
}

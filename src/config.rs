use crate::example_scenes::SceneComplexity;
use crate::*;

use getopts::Options;
use std::path::PathBuf;

pub const BRIEF: &str = "Usage: reflectrace [options] RESOLUTION SCENE_COMPLEXITY OUTPUT_FILE

    RESOLUTION        WIDTHxHEIGHT, e.g. 640x480
    SCENE_COMPLEXITY  low, medium or high
    OUTPUT_FILE       image file, format chosen by extension (e.g. out.png)";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub complexity: SceneComplexity,
    pub output: PathBuf,
    pub light: Option<P3>,
    pub max_reflection_depth: Option<usize>,
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Render(Config),
}

pub fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help");
    opts.optopt("", "light", "light position", "X,Y,Z");
    opts.optopt("", "depth", "maximum number of mirror bounces (default 10)", "N");
    opts
}

pub fn usage() -> String {
    options().usage(BRIEF)
}

/// Parses the arguments following the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, Error> {
    let matches = options().parse(args.iter().map(|a| a.as_ref()))?;
    if matches.opt_present("h") {
        return Ok(Command::Help);
    }
    if matches.free.len() != 3 {
        return Err(Error::ArgumentCount(matches.free.len()));
    }
    let (width, height) = parse_resolution(&matches.free[0])?;
    let complexity: SceneComplexity = matches.free[1].parse()?;
    let output = PathBuf::from(&matches.free[2]);

    let light = match matches.opt_str("light") {
        Some(s) => Some(parse_point(&s).ok_or(Error::InvalidOption {
            option: "light",
            value: s,
        })?),
        None => None,
    };
    let max_reflection_depth = match matches.opt_str("depth") {
        Some(s) => Some(s.parse().map_err(|_| Error::InvalidOption {
            option: "depth",
            value: s,
        })?),
        None => None,
    };

    Ok(Command::Render(Config {
        width,
        height,
        complexity,
        output,
        light,
        max_reflection_depth,
    }))
}

/// Largest accepted `width * height`.
pub const MAX_PIXELS: u64 = u32::MAX as u64;

/// `"WIDTHxHEIGHT"`, both strictly positive, at most [`MAX_PIXELS`] in total.
pub fn parse_resolution(s: &str) -> Result<(u32, u32), Error> {
    let malformed = || Error::MalformedResolution(s.to_owned());
    let mut it = s.splitn(2, 'x');
    let w: i64 = it.next().and_then(|w| w.trim().parse().ok()).ok_or_else(malformed)?;
    let h: i64 = it.next().and_then(|h| h.trim().parse().ok()).ok_or_else(malformed)?;
    if w <= 0 || h <= 0 {
        return Err(Error::NonPositiveResolution);
    }
    if w > u32::MAX as i64 || h > u32::MAX as i64 {
        return Err(malformed());
    }
    let (w, h) = (w as u32, h as u32);
    if w as u64 * h as u64 > MAX_PIXELS || crate::image::Image::pixel_count(w, h).is_none() {
        return Err(Error::ResolutionTooLarge(w, h));
    }
    Ok((w, h))
}

fn parse_point(s: &str) -> Option<P3> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<f32>().ok())
        .collect::<Option<Vec<f32>>>()?;
    match coords[..] {
        [x, y, z] => Some(P3::new(x, y, z)),
        _ => None,
    }
}

use clap::ArgMatches;
use log::{debug, info, Level};
use microcv_image::traits::OperationsTrait;
use microcv_imageprocs::crop::Crop;
use microcv_imageprocs::grayscale::{GrayscaleToRgb, RgbToGrayscale};
use microcv_imageprocs::sobel::Sobel;

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("warn").unwrap() {
        log_level = Level::Warn;
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

/// Collect the operations requested on the command line, in the
/// order they are applied: crop, then color conversion, then sobel
pub fn parse_operations(options: &ArgMatches) -> Result<Vec<Box<dyn OperationsTrait>>, String> {
    let mut operations: Vec<Box<dyn OperationsTrait>> = vec![];

    if let Some(rect) = options.get_one::<String>("crop") {
        let (x1, y1, x2, y2) = parse_crop_rectangle(rect)?;
        debug!("Added crop ({x1},{y1})-({x2},{y2}) operation");
        operations.push(Box::new(Crop::new(x1, y1, x2, y2)));
    }
    if *options.get_one::<bool>("grayscale").unwrap() {
        debug!("Added grayscale operation");
        operations.push(Box::new(RgbToGrayscale::new()));
    }
    if *options.get_one::<bool>("to-rgb").unwrap() {
        debug!("Added to-rgb operation");
        operations.push(Box::new(GrayscaleToRgb::new()));
    }
    if *options.get_one::<bool>("sobel").unwrap() {
        debug!("Added sobel operation");
        operations.push(Box::new(Sobel::new()));
    }

    Ok(operations)
}

/// Parse a `x1:y1:x2:y2` rectangle argument
fn parse_crop_rectangle(argument: &str) -> Result<(usize, usize, usize, usize), String> {
    let coords = argument
        .split(':')
        .map(|v| str::parse::<usize>(v.trim()).map_err(|e| format!("{argument:?}: {e}")))
        .collect::<Result<Vec<usize>, String>>()?;

    if let [x1, y1, x2, y2] = coords[..] {
        Ok((x1, y1, x2, y2))
    } else {
        Err(format!(
            "expected an x1:y1:x2:y2 rectangle, got {argument:?}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::cmd_parsers::parse_crop_rectangle;

    #[test]
    fn parse_valid_rectangle() {
        assert_eq!(parse_crop_rectangle("37:12:92:71"), Ok((37, 12, 92, 71)));
        assert_eq!(parse_crop_rectangle("0:0:1:1"), Ok((0, 0, 1, 1)));
    }

    #[test]
    fn reject_malformed_rectangles() {
        assert!(parse_crop_rectangle("37:12:92").is_err());
        assert!(parse_crop_rectangle("37:12:92:71:4").is_err());
        assert!(parse_crop_rectangle("a:b:c:d").is_err());
        assert!(parse_crop_rectangle("1:1:-4:5").is_err());
        assert!(parse_crop_rectangle("").is_err());
    }
}

use clap::{Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("microcv")
        .about("A micro computer-vision tool: crop, grayscale and sobel edge detection")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .required(true))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("crop")
            .long("crop")
            .help_heading("OPERATIONS")
            .value_name("x1:y1:x2:y2")
            .help("Crop the image to the given rectangle")
            .long_help("Crop the image to the rectangle with top-left corner (x1,y1) \
and exclusive bottom-right corner (x2,y2).\nAn invalid rectangle leaves the image unchanged."))
        .arg(Arg::new("grayscale")
            .long("grayscale")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Convert the image to grayscale")
            .long_help("Change image type from RGB to grayscale by averaging the color channels"))
        .arg(Arg::new("to-rgb")
            .long("to-rgb")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Convert a grayscale image to RGB")
            .long_help("Replicate the gray channel of a grayscale image into three RGB channels"))
        .arg(Arg::new("sobel")
            .long("sobel")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Detect edges with a sobel filter")
            .long_help("Run sobel gradient-magnitude edge detection.\nThe output is always \
a single-channel image; RGB input is converted to grayscale first."))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn cmd_args_are_consistent() {
        create_cmd_args().debug_assert();
    }
}

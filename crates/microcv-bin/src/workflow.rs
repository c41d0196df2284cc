use clap::ArgMatches;
use log::{debug, info};
use microcv_image::buffer::PixelBuffer;
use microcv_image::codecs::ImageFormat;
use microcv_image::errors::ImageErrors;

use crate::cmd_parsers::parse_operations;

pub(crate) fn create_and_exec_workflow_from_cmd(args: &ArgMatches) -> Result<(), ImageErrors> {
    info!("Creating workflow from input");

    let in_file = args.get_one::<String>("in").unwrap();
    let out_file = args.get_one::<String>("out").unwrap();

    // reject unsupported extensions before doing any work
    let in_format = ImageFormat::from_path(in_file);
    if !in_format.has_decoder() {
        return Err(ImageErrors::UnsupportedFormat(in_format));
    }
    let out_format = ImageFormat::from_path(out_file);
    if !out_format.has_encoder() {
        return Err(ImageErrors::UnsupportedFormat(out_format));
    }

    let operations = parse_operations(args).map_err(ImageErrors::GenericString)?;

    let mut image = PixelBuffer::open(in_file)?;
    debug!(
        "decoded {in_file}: {}x{}, {} channel(s)",
        image.width(),
        image.height(),
        image.channels()
    );

    for operation in &operations {
        operation.execute(&mut image)?;
    }
    if image.is_empty() {
        return Err(ImageErrors::GenericString(format!(
            "operations produced an empty image, refusing to write {out_file}"
        )));
    }

    image.save(out_file)?;
    info!("wrote {out_file}");

    Ok(())
}

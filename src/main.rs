use clap::Parser;
use log::info;
use threshold_bench::driver::BenchmarkDriver;
use threshold_bench::error::BenchError;
use threshold_bench::image_source::{
    parse_extents, FileImageSource, ImageSource, SyntheticImageSource,
};
use threshold_bench::report::{report_all, JsonSummary, LogReporter, PngReporter, Reporter};
use threshold_bench::strategies::verify::check_contract;

// handle command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        help = "Image file to threshold",
        required_unless_present = "synthetic",
        conflicts_with = "synthetic"
    )]
    input: Option<String>,

    #[arg(long, value_name = "ROWSxCOLS", help = "Use a generated ramp instead of a file")]
    synthetic: Option<String>,

    #[arg(
        long,
        default_value_t = 0,
        requires = "synthetic",
        help = "Padding samples after each synthetic row (makes the buffer non-contiguous)"
    )]
    padding: usize,

    #[arg(short, long, help = "Directory to write thresholded images to")]
    output: Option<String>,

    #[arg(long, default_value_t = false, help = "Print timings as JSON to stdout")]
    json: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Check every output against the threshold contract"
    )]
    verify: bool,
}

fn main() -> Result<(), BenchError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // parse command line arguments
    let args = Args::parse();

    let source: Box<dyn ImageSource> = match (&args.input, &args.synthetic) {
        (Some(path), _) => Box::new(FileImageSource::new(path)),
        (None, Some(extents)) => {
            let (rows, cols) = parse_extents(extents)?;
            Box::new(SyntheticImageSource::new(rows, cols).with_padding(args.padding))
        }
        (None, None) => {
            return Err(BenchError::Configuration(
                "either --input or --synthetic is required".to_string(),
            ))
        }
    };

    let driver = BenchmarkDriver::standard();
    let (input, outcomes) = driver.run_from(source.as_ref())?;
    info!(
        "Input {}x{} (contiguous: {})",
        input.rows(),
        input.cols(),
        input.is_contiguous()
    );

    if args.verify {
        for (run, outcome) in driver.runs().iter().zip(&outcomes) {
            let honored = run.strategy.effective_params(run.params);
            check_contract(&run.label, &input, &outcome.output, honored)?;
        }
        info!("All outputs match the threshold contract");
    }

    let mut reporters: Vec<Box<dyn Reporter>> = vec![Box::new(LogReporter)];
    if let Some(dir) = &args.output {
        let png = PngReporter::new(dir)?;
        png.write_input(&input)?;
        reporters.push(Box::new(png));
    }
    if args.json {
        reporters.push(Box::new(JsonSummary::new(std::io::stdout())));
    }

    report_all(&outcomes, &mut reporters)
}

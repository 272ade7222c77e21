extern crate clap;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{tga, PlaneMapper, PlaneRect, Renderer};
use std::str::FromStr;
use std::time::Instant;

/// The rendered region of the complex plane, and the grid it is
/// projected onto.  Fixed by design; only the worker count and the
/// iteration budget are operator-facing knobs.
const RECT: PlaneRect = PlaneRect {
    left: -2.0,
    right: 1.0,
    top: 1.125,
    bottom: -1.125,
};
const WIDTH: usize = 1920;
const HEIGHT: usize = 1200;

const OUTPUT: &str = "output";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn args<'a>(default_threads: &'a str) -> ArgMatches<'a> {
    App::new("mandelbrot")
        .version("0.1.0")
        .about("Threaded Mandelbrot escape-time renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("output.tga")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse thread count",
                        "Thread count must be at least 1",
                    )
                })
                .help("Number of worker threads"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("500")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Escape-time iteration budget per pixel"),
        )
        .get_matches()
}

fn main() {
    let default_threads = num_cpus::get().to_string();
    let matches = args(&default_threads);

    let outfile = matches.value_of(OUTPUT).unwrap();
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");

    let plane = match PlaneMapper::new(WIDTH, HEIGHT, RECT) {
        Ok(plane) => plane,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };
    let renderer = Renderer::new(plane, iterations);
    let mut pixels = vec![0u32; WIDTH * HEIGHT];

    let start = Instant::now();
    if let Err(e) = renderer.render(&mut pixels, threads) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
    println!(
        "Computing the Mandelbrot set took {} ms.",
        start.elapsed().as_millis()
    );

    if let Err(e) = tga::write_tga(outfile, &pixels, WIDTH, HEIGHT) {
        eprintln!("Error writing to {}: {}", outfile, e);
        std::process::exit(1);
    }
}

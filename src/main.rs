use clap::Parser;
use log::debug;

use glfsr::{Register, Word};

fn parse_hex(s: &str) -> Result<u64, std::num::ParseIntError> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u64::from_str_radix(s, 16)
}

fn run<T: Word>(args: &Args) -> String {
    let mut register = Register::new(T::from_u64(args.polynomial), T::from_u64(args.seed));
    debug!(
        "polynomial: {:x}, seed: {:x}, width: {}",
        args.polynomial,
        args.seed,
        T::BITS
    );

    let mut out = String::new();
    if args.bytes {
        for _ in 0..args.count {
            out.push_str(&format!("{:02x}", register.next_byte()));
        }
    } else {
        for bit in register.by_ref().take(args.count) {
            out.push(if bit == 1 { '1' } else { '0' });
        }
    }
    debug!("final state: {:x}", register.state().to_u64());

    out
}

/// Galois LFSR bitstream generator
#[derive(Parser, Debug)]
#[command(author, version,about, long_about=None)]
struct Args {
    /// Feedback polynomial in hex, bit i set for each x^i term
    #[arg(short, long, value_parser = parse_hex)]
    polynomial: u64,

    /// Seed value in hex
    #[arg(short, long, value_parser = parse_hex)]
    seed: u64,

    /// Register width in bits (8, 16, 32 or 64)
    #[arg(short, long, default_value_t = 32)]
    width: u32,

    /// Number of bits to emit, or bytes with --bytes
    #[arg(short, long, default_value_t = 64)]
    count: usize,

    /// Emit hex bytes instead of 0/1 characters
    #[arg(short, long)]
    bytes: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let out = match args.width {
        8 => run::<u8>(&args),
        16 => run::<u16>(&args),
        32 => run::<u32>(&args),
        64 => run::<u64>(&args),
        w => panic!("Unsupported width: {}", w),
    };

    println!("{}", out);
}

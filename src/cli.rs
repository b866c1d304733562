//! Command line definition, using the clap builder API (not derive),
//! one `Command` per subcommand.
//!
//! Exposed from the library (rather than living next to `main.rs`)
//! since `bin/strcalc.rs` is a thin demo driver and the argument
//! surface is small enough to be worth documenting as part of the
//! crate's public API.

use clap::{arg, crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let long_help = "strcalc evaluates fixed-width two's-complement arithmetic the way a \
compiler's constant folder would, at a precision you choose with --precision.
Set RUST_LOG to control logging verbosity (trace,debug,info,warn,error).

Examples:
---------
Add two decimal values at 32-bit precision:  strcalc -p 32 add 100 27
Multiply hex operands:                       strcalc -p 64 -b 16 mul 1a 2b
Reformat a decimal value as hex:             strcalc -p 32 print 12345 --out-base 16 --upper
Arithmetic right shift, losing a bit:        strcalc -p 32 -b 16 shr 80000001 --count 1 --bitsize 32 --arithmetic --signed
Smallest signed 8-bit value:                 strcalc -p 16 min --bitsize 8 --signed";

    let mut main_cmd = Command::new("strcalc")
        .about("Fixed-width, nibble-addressed arbitrary-precision integer calculator")
        .after_long_help(long_help)
        .version(crate_version!())
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .value_name("BITS")
                .help("bit width of the calculator; rounded up to a multiple of 4")
                .required(true)
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("base")
                .short('b')
                .long("base")
                .value_name("BASE")
                .help("radix (2, 8, 10, or 16) used to parse numeric operands")
                .default_value("10")
                .value_parser(clap::value_parser!(u32)),
        );

    let operand = |name: &'static str| Arg::new(name).required(true);

    main_cmd = main_cmd
        .subcommand(
            Command::new("add")
                .about("a + b")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("sub")
                .about("a - b")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("mul")
                .about("a * b, truncated to the configured precision")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("div")
                .about("truncating a / b")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("rem")
                .about("a - (a / b) * b")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("divmod")
                .about("quotient and remainder together")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(Command::new("neg").about("-a").arg(operand("a")))
        .subcommand(Command::new("not").about("bitwise NOT of a").arg(operand("a")))
        .subcommand(
            Command::new("and")
                .about("bitwise AND")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("or")
                .about("bitwise OR")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("xor")
                .about("bitwise XOR")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("andnot")
                .about("a AND (NOT b)")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("shl")
                .about("logical left shift")
                .arg(operand("a"))
                .arg(arg!(--count <N> "number of bits to shift").required(true).value_parser(clap::value_parser!(u32)))
                .arg(arg!(--bitsize <N> "declared width of the value being shifted").required(true).value_parser(clap::value_parser!(u32)))
                .arg(arg!(--signed "treat the value as signed for overflow masking").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("shr")
                .about("right shift, logical by default")
                .arg(operand("a"))
                .arg(arg!(--count <N> "number of bits to shift").required(true).value_parser(clap::value_parser!(u32)))
                .arg(arg!(--bitsize <N> "declared width of the value being shifted").required(true).value_parser(clap::value_parser!(u32)))
                .arg(arg!(--signed "treat the value as signed").action(ArgAction::SetTrue))
                .arg(arg!(--arithmetic "sign-fill the vacated high bits instead of zero-filling").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("min")
                .about("smallest representable value of a bit width")
                .arg(arg!(--bitsize <N> "bit width").required(true).value_parser(clap::value_parser!(u32)))
                .arg(arg!(--signed "signed rather than unsigned").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("max")
                .about("largest representable value of a bit width")
                .arg(arg!(--bitsize <N> "bit width").required(true).value_parser(clap::value_parser!(u32)))
                .arg(arg!(--signed "signed rather than unsigned").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("popcount").about("count of set bits").arg(operand("a")))
        .subcommand(
            Command::new("compare")
                .about("signed three-way comparison, two's-complement order")
                .arg(operand("a"))
                .arg(operand("b")),
        )
        .subcommand(
            Command::new("print")
                .about("reformat a value into another base")
                .arg(operand("a"))
                .arg(
                    arg!(--"out-base" <BASE> "radix to print in (2, 8, 10, or 16)")
                        .default_value("10")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(arg!(--upper "use uppercase hex digits").action(ArgAction::SetTrue))
                .arg(
                    arg!(--bitsize <N> "logical width to print, defaults to the configured precision")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(arg!(--unsigned "print the raw magnitude, with no leading '-' for a set sign bit").action(ArgAction::SetTrue)),
        );

    main_cmd
}

//! # Command Line Interface
//!
//! Dispatch commands to the `strcalc` library.

use clap::ArgMatches;

use strcalc::calculator::{Base, Calculator, Sign};
use strcalc::{cli, Buffer};

type StdResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> StdResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let main_cmd = cli::build_cli();
    let matches = main_cmd.get_matches();

    let precision = *matches.get_one::<u32>("precision").unwrap();
    let base = Base::from_radix(*matches.get_one::<u32>("base").unwrap())?;
    let calc = Calculator::new(precision);

    if let Some(cmd) = matches.subcommand_matches("add") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        let (sum, carry) = calc.add(&a, &b);
        println!("{}", strcalc::egress::print(&calc, &sum, precision, Base::Dec, true)?);
        log::debug!("carry: {carry}");
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("sub") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        let (diff, carry) = calc.sub(&a, &b);
        println!("{}", strcalc::egress::print(&calc, &diff, precision, Base::Dec, true)?);
        log::debug!("carry: {carry}");
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("mul") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        let product = calc.mul(&a, &b);
        println!("{}", strcalc::egress::print(&calc, &product, precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("div") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        let q = calc.div(&a, &b)?;
        println!("{}", strcalc::egress::print(&calc, &q, precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("rem") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        let r = calc.rem(&a, &b)?;
        println!("{}", strcalc::egress::print(&calc, &r, precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("divmod") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        let (q, r, carry) = calc.divmod(&a, &b)?;
        println!(
            "{} r {}",
            strcalc::egress::print(&calc, &q, precision, Base::Dec, true)?,
            strcalc::egress::print(&calc, &r, precision, Base::Dec, true)?
        );
        log::debug!("remainder nonzero: {carry}");
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("neg") {
        let a = one_operand(&calc, base, cmd)?;
        let out = calc.neg(&a);
        println!("{}", strcalc::egress::print(&calc, &out, precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("not") {
        let a = one_operand(&calc, base, cmd)?;
        let out = calc.not(&a);
        println!("{}", strcalc::egress::print(&calc, &out, precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("and") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        println!("{}", strcalc::egress::print(&calc, &calc.and(&a, &b), precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("or") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        println!("{}", strcalc::egress::print(&calc, &calc.or(&a, &b), precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("xor") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        println!("{}", strcalc::egress::print(&calc, &calc.xor(&a, &b), precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("andnot") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        println!("{}", strcalc::egress::print(&calc, &calc.andnot(&a, &b), precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("shl") {
        let a = one_operand(&calc, base, cmd)?;
        let count = *cmd.get_one::<u32>("count").unwrap();
        let bitsize = *cmd.get_one::<u32>("bitsize").unwrap();
        let signed = cmd.get_flag("signed");
        let out = calc.shl(&a, count, bitsize, signed);
        println!("{}", strcalc::egress::print(&calc, &out, precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("shr") {
        let a = one_operand(&calc, base, cmd)?;
        let count = *cmd.get_one::<u32>("count").unwrap();
        let bitsize = *cmd.get_one::<u32>("bitsize").unwrap();
        let signed = cmd.get_flag("signed");
        let (out, carry) = if cmd.get_flag("arithmetic") {
            calc.shrs(&a, count, bitsize, signed)
        } else {
            calc.shr(&a, count, bitsize, signed)
        };
        println!("{}", strcalc::egress::print(&calc, &out, precision, Base::Dec, true)?);
        log::debug!("bits lost: {carry}");
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("min") {
        let bitsize = *cmd.get_one::<u32>("bitsize").unwrap();
        let signed = cmd.get_flag("signed");
        let out = calc.min_from_bits(bitsize, signed);
        println!("{}", strcalc::egress::print(&calc, &out, precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("max") {
        let bitsize = *cmd.get_one::<u32>("bitsize").unwrap();
        let signed = cmd.get_flag("signed");
        let out = calc.max_from_bits(bitsize, signed);
        println!("{}", strcalc::egress::print(&calc, &out, precision, Base::Dec, true)?);
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("popcount") {
        let a = one_operand(&calc, base, cmd)?;
        println!("{}", calc.popcount(&a, precision));
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("compare") {
        let (a, b) = two_operands(&calc, base, cmd)?;
        println!("{:?}", calc.compare(&a, &b));
        return Ok(());
    }
    if let Some(cmd) = matches.subcommand_matches("print") {
        let a = one_operand(&calc, base, cmd)?;
        let out_radix = *cmd.get_one::<u32>("out-base").unwrap();
        let mut out_base = Base::from_radix(out_radix)?;
        if out_base == Base::HexLower && cmd.get_flag("upper") {
            out_base = Base::HexUpper;
        }
        let bits = cmd.get_one::<u32>("bitsize").copied().unwrap_or(precision);
        let signed = !cmd.get_flag("unsigned");
        println!("{}", strcalc::egress::print(&calc, &a, bits, out_base, signed)?);
        return Ok(());
    }

    unreachable!("clap requires a subcommand");
}

fn parse_operand(calc: &Calculator, base: Base, text: &str) -> Result<Buffer, Box<dyn std::error::Error>> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, text),
    };
    Ok(strcalc::ingress::from_str(calc, sign, base.radix(), digits)?)
}

fn one_operand(calc: &Calculator, base: Base, cmd: &ArgMatches) -> Result<Buffer, Box<dyn std::error::Error>> {
    let a = cmd.get_one::<String>("a").unwrap();
    parse_operand(calc, base, a)
}

fn two_operands(
    calc: &Calculator,
    base: Base,
    cmd: &ArgMatches,
) -> Result<(Buffer, Buffer), Box<dyn std::error::Error>> {
    let a = cmd.get_one::<String>("a").unwrap();
    let b = cmd.get_one::<String>("b").unwrap();
    Ok((parse_operand(calc, base, a)?, parse_operand(calc, base, b)?))
}

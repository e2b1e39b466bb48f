use std::io::Write;

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| String::from("paramecho"));
    let params: Vec<_> = args.collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = paramecho::run(&program, &params, &mut out)?;
    out.flush()?;

    std::process::exit(code);
}

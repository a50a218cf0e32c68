use ansi_to_style::{AnsiStreamParser, ColorTag};
use cozy_console::{
    command::run_command, ConsoleConfig, ConsoleLog, ConsoleSession, SessionId,
};
use log::{info, LevelFilter::Info};
use tokio::process::Command;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = custom_utils::logger::logger_feature(
        "console",
        "error,simple_ansi_to_style=debug,cozy_console=debug",
        Info,
        false,
    )
    .build();

    // a server log split across packets, style carried between them
    let mut parser = AnsiStreamParser::new(ColorTag::White);
    for chunk in [
        "[12:00:01 INFO]: \x1b[32mOK\x1b[0m done\n",
        "\x1b[1;33m",
        "warn: view distance lowered\x1b[0m\n",
        "",
    ] {
        let spans = parser.feed(chunk);
        info!("{:?} -> {}", chunk, serde_json::to_string(&spans)?);
    }

    // `simple-ansi-to-style [config.json] -- <program> [args..]`
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (head, program) = match args.iter().position(|x| x == "--") {
        Some(index) => (&args[..index], &args[index + 1..]),
        None => (&args[..], &[][..]),
    };
    let config = match head.first() {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };
    let Some((program, program_args)) = program.split_first() else {
        return Ok(());
    };

    let log = ConsoleLog::from_config(&config);
    let mut session = ConsoleSession::new(SessionId(1), &config);
    let mut command = Command::new(program);
    command.args(program_args);
    let status = run_command(command, &mut session, &log, &config).await?;
    info!("{} frames, exit {}", log.len(), status);
    println!("{}", log.to_json()?);
    Ok(())
}

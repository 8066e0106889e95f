//! Console front end of the address book.
//!
//! Reads one command per line, dispatches it to the contact service and
//! writes the reply. Stdout is reserved for the dialogue; logs go to stderr.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command, UnknownCommand};
pub use handlers::{dispatch, Reply};

use crate::services::ContactService;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Printed once when a session starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Run a bot session until `exit`/`close` or end of input.
///
/// # Arguments
/// * `service` - The contact service the commands operate on
/// * `input` - Line-oriented command source (stdin in production)
/// * `output` - Where prompts and replies are written (stdout in production)
/// * `prompt` - Text written before each command is read
pub async fn run_session<S, R, W>(
    service: &mut S,
    input: R,
    mut output: W,
    prompt: &str,
) -> std::io::Result<()>
where
    S: ContactService + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(&mut output, GREETING).await?;
    let mut lines = input.lines();

    loop {
        output.write_all(prompt.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("input closed, ending session");
            break;
        };
        let Some((keyword, args)) = parse_input(&line) else {
            continue;
        };

        let command = match keyword.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!("{}", e);
                write_line(&mut output, "Invalid command.").await?;
                continue;
            }
        };

        match dispatch(service, command, &args) {
            Reply::Continue(text) => write_line(&mut output, &text).await?,
            Reply::Exit(text) => {
                write_line(&mut output, &text).await?;
                info!("exit requested, ending session");
                break;
            }
        }
    }

    output.flush().await
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}

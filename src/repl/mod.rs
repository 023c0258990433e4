//! Interactive read loop.
//!
//! Generic over the reader and writer so tests can drive a session from a
//! byte buffer instead of a terminal.

use crate::commands::{CommandDispatcher, Reply};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub const PROMPT: &str = ">>>: ";
pub const NEXT_PAGE_PROMPT: &str = "Press Enter for next records";
pub const END_OF_BOOK: &str = "End of the phone book";

/// Run the interpreter until an exit command or end of input.
pub async fn run<R, W>(dispatcher: &CommandDispatcher, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("Input closed, ending session");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match dispatcher.dispatch(&line).await {
            Reply::Text(text) => write_line(&mut writer, &text).await?,
            Reply::Exit(text) => {
                write_line(&mut writer, &text).await?;
                break;
            }
            Reply::Pages(pages) => {
                debug!(pages = pages.len(), "Showing pages");
                for page in pages {
                    write_line(&mut writer, NEXT_PAGE_PROMPT).await?;
                    if lines.next_line().await?.is_none() {
                        return Ok(());
                    }
                    write_line(&mut writer, &page).await?;
                }
                write_line(&mut writer, END_OF_BOOK).await?;
            }
        }
    }

    writer.flush().await
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await
}

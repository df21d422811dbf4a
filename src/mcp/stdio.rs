//! stdio transport
//!
//! Reads one JSON-RPC message per line and writes one response per line.
//! Logging must go to stderr while this transport is active.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::{error::McpError, handlers::dispatch, helpers::rpc_error, models::JsonRpcRequest};
use crate::state::AppState;

/// Serves MCP over the process's stdin and stdout until stdin closes.
pub async fn serve_stdio(state: &AppState) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve_lines(state, stdin, stdout).await
}

/// Serves MCP over any line-oriented reader/writer pair.
pub async fn serve_lines<R, W>(state: &AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tracing::info!("MCP stdio server ready");

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(req) => dispatch(state, req),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable MCP message");
                Some(rpc_error(
                    serde_json::Value::Null,
                    McpError::Parse.code(),
                    "Parse error",
                ))
            }
        };

        if let Some(response) = response {
            writer.write_all(response.to_string().as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    tracing::info!("MCP stdio client disconnected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn run(input: &str) -> Vec<Value> {
        let state = AppState::new();
        let mut output = Vec::new();
        serve_lines(&state, input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn answers_each_request_on_its_own_line() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"check_product_availability","arguments":{"product_id":"decor-202","store_id":"pickup"}}}"#,
            "\n",
        );

        let responses = run(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "customer-services-mcp-server");
        let availability = &responses[1]["result"]["structuredContent"];
        assert_eq!(availability["available"], false);
        assert_eq!(availability["status"], "out_of_stock");
    }

    #[tokio::test]
    async fn malformed_lines_get_parse_errors() {
        let responses = run("not json\n").await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[0]["id"], Value::Null);
    }
}

//! Prints the MCP tool catalogue, as a connected client would see it.

use std::sync::Arc;

use garden_services::mcp::McpClient;
use garden_services::router::create_app_router;
use garden_services::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = McpClient::new(create_app_router(Arc::new(AppState::new())));
    client.initialize().await?;

    let tools = client.list_tools().await?;

    println!("{}", "=".repeat(80));
    println!("MCP SERVER TOOLS");
    println!("{}", "=".repeat(80));
    println!("\nTotal tools available: {}\n", tools.len());

    for (i, tool) in tools.iter().enumerate() {
        println!("{}. {}", i + 1, tool.name);
        println!("   Description: {}", tool.description);

        let required = tool.required();
        if let Some(properties) = tool.input_schema.get("properties").and_then(|p| p.as_object()) {
            println!("   Input Schema:");
            for (name, details) in properties {
                let kind = details.get("type").and_then(|t| t.as_str()).unwrap_or("unknown");
                let marker = if required.contains(&name.as_str()) {
                    "required"
                } else {
                    "optional"
                };
                println!("     - {}: {} ({})", name, kind, marker);
                if let Some(description) = details.get("description").and_then(|d| d.as_str()) {
                    println!("       {}", description);
                }
            }
        }
        println!();
    }

    Ok(())
}

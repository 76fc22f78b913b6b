//! Create command implementation

use crate::cli::CreateArgs;
use crate::client::{ImageAttachment, ServiceCallInput, WorkforceApi};
use anyhow::Context;

/// Handle the create command: build a service-call input from the flags and
/// submit it, with an optional image attachment.
pub async fn handle_create(args: &CreateArgs, client: &dyn WorkforceApi) -> anyhow::Result<String> {
    let input = ServiceCallInput {
        category: args.category.clone(),
        description: args.description.clone(),
        latitude: args.latitude,
        longitude: args.longitude,
        location: args.location.clone(),
        priority: args.priority.clone(),
    };

    let image = match &args.image {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "issue_image".to_string());
            Some(ImageAttachment::new(file_name, bytes))
        }
        None => None,
    };

    let response = client
        .create_service_call(&input, image)
        .await
        .context("Failed to create service call")?;

    match response.ticket_id {
        Some(ticket_id) => Ok(format!("Service call created: {}", ticket_id)),
        None => Ok(format!(
            "Service call created. {}",
            if response.message.is_empty() {
                "No ticket id returned".to_string()
            } else {
                response.message
            }
        )),
    }
}

//! Report command implementation.

use std::fs;
use std::path::Path;

use civic_lib::{
    Category, CivicError, ImageAttachment, IssueInput, Location, MAX_IMAGE_BYTES, Result, Urgency,
};
use tracing::debug;

use super::print_json;
use crate::cli::ReportArgs;
use crate::config::{CliOverrides, Workspace};

/// Execute the report command.
///
/// # Errors
///
/// Returns an error if the input is invalid, the image is unreadable or too
/// large, or the snapshot cannot be written.
pub fn execute(
    args: &ReportArgs,
    json: bool,
    workspace: &Workspace,
    overrides: &CliOverrides,
) -> Result<()> {
    let user = workspace.current_user(overrides)?;
    let input = build_input(args)?.reported_by_user(user.as_ref());

    let mut store = workspace.open_store();
    let issue = store.create(input)?;

    if json {
        print_json(&issue)?;
    } else {
        println!("Reported #{}: {}", issue.id, issue.title);
    }
    Ok(())
}

fn build_input(args: &ReportArgs) -> Result<IssueInput> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;
    let urgency = args
        .urgency
        .as_deref()
        .map(str::parse::<Urgency>)
        .transpose()?
        .unwrap_or_default();
    let location = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(Location::new(lat, lng)),
        _ => None,
    };
    let image = args.image.as_deref().map(read_image).transpose()?;

    Ok(IssueInput {
        title: args.title.clone().unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        category,
        urgency,
        location,
        image,
        ..Default::default()
    })
}

/// Read and encode a photo, rejecting oversized files before reading them.
fn read_image(path: &Path) -> Result<ImageAttachment> {
    let size = fs::metadata(path)?.len();
    if size > MAX_IMAGE_BYTES as u64 {
        return Err(CivicError::PayloadTooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            limit: MAX_IMAGE_BYTES,
        });
    }
    let bytes = fs::read(path)?;
    let attachment = ImageAttachment::from_bytes(&bytes)?;
    debug!(
        path = %path.display(),
        mime = attachment.mime(),
        bytes = attachment.source_len(),
        "Encoded image"
    );
    Ok(attachment)
}

use anchor_lang::prelude::*;
use crate::instructions::is_valid::ValidityQuery;
use crate::metadata::DisplayPayload;

/// Display payload for `token_id`, defined for unknown ids too
pub fn describe(ctx: Context<ValidityQuery>, token_id: u64) -> Result<DisplayPayload> {
    Ok(DisplayPayload::new(ctx.accounts.check(token_id)))
}

/// Display payload for `token_id` as a JSON data URI
pub fn token_uri(ctx: Context<ValidityQuery>, token_id: u64) -> Result<String> {
    let uri = DisplayPayload::new(ctx.accounts.check(token_id)).to_data_uri();

    msg!("Access token {} uri: {}", token_id, uri);

    Ok(uri)
}

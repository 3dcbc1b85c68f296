use tracing::info;

use crate::context::AppContext;
use crate::core::models::{InboundEvent, MessageRecord};

/// Buffer an inbound text event in its chat's history.
pub fn record_message(ctx: &AppContext, event: InboundEvent) {
    let chat_id = event.chat_id;
    let user_id = event.user_id;
    ctx.store.append(chat_id, MessageRecord::from(event));
    info!(chat_id, user_id, "Saved message");
}

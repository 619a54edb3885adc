use std::cell::RefCell;

use crate::state::WidgetState;
use crate::transport::ChatTransport;

/// Run one chat turn against `transport`.
///
/// Calls `on_update` after the user message is appended and again after the
/// reply (or apology) lands, with no borrow of `state` held. Returns `false`
/// when the send was ignored by the guard.
pub async fn send_message<T, F>(state: &RefCell<WidgetState>, transport: &T, on_update: F) -> bool
where
    T: ChatTransport + ?Sized,
    F: Fn(),
{
    let request = state.borrow_mut().begin_send();
    let Some(request) = request else {
        return false;
    };
    on_update();

    let result = transport.send_chat(&request).await;
    if let Err(err) = &result {
        log::error!("Chat request error: {}", err);
    }

    state.borrow_mut().finish_send(result);
    on_update();
    true
}

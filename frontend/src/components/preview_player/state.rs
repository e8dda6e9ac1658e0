use common::studio::player::PreviewPlayer;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::messages::Msg;

/// Where the document was last shared, and what it looked like then.
pub struct SharedLink {
    pub id: String,
    pub fingerprint: String,
}

pub struct PreviewPlayerComponent {
    pub player: PreviewPlayer,
    /// The single armed dwell timer. Replacing or dropping it cancels it.
    pub timer: Option<Timeout>,
    pub container_ref: NodeRef,
    pub shared: Option<SharedLink>,
    /// A share or unshare request is in flight.
    pub busy: bool,
    pub autoplay_done: bool,
}

impl PreviewPlayerComponent {
    pub fn new() -> Self {
        Self {
            player: PreviewPlayer::new(),
            timer: None,
            container_ref: NodeRef::default(),
            shared: None,
            busy: false,
            autoplay_done: false,
        }
    }

    /// Cancels the current timer and arms a new one for whatever is left of
    /// the current iteration, if the player is playing.
    pub fn rearm(&mut self, ctx: &Context<Self>) {
        let iterations = &ctx.props().document.iterations;
        self.timer = self.player.remaining_dwell_ms(iterations).map(|ms| {
            let link = ctx.link().clone();
            Timeout::new(ms.min(u32::MAX as u64) as u32, move || link.send_message(Msg::Tick))
        });
    }
}

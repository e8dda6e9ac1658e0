//! Preview player: replays the iterations over the canvas as a slideshow.
//!
//! Responsibilities
//! - Wire the Yew `Component` to `update::update` and `view::view`.
//! - Keep exactly one timer armed for the current iteration's duration while
//!   playing, re-arming it whenever the index or the iteration list changes.
//! - Share, re-share and unshare the document through the sharing client.

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PreviewPlayerProps;
pub use state::PreviewPlayerComponent;
use yew::prelude::*;

impl Component for PreviewPlayerComponent {
    type Message = Msg;
    type Properties = PreviewPlayerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PreviewPlayerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().document.iterations != old_props.document.iterations {
            self.player.sync(&ctx.props().document.iterations);
            self.rearm(ctx);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        if props.autoplay && !self.autoplay_done && !props.document.iterations.is_empty() {
            self.autoplay_done = true;
            ctx.link().send_message(Msg::Play);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

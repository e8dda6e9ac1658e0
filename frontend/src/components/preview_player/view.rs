use common::studio::canvas::CanvasMode;
use yew::prelude::*;

use crate::components::canvas::CanvasEditor;

use super::messages::Msg;
use super::state::PreviewPlayerComponent;

pub fn view(component: &PreviewPlayerComponent, ctx: &Context<PreviewPlayerComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let iterations = &props.document.iterations;
    let player = &component.player;
    let empty = iterations.is_empty();

    let play_pause = if player.is_playing() {
        html! { <button onclick={link.callback(|_| Msg::Pause)}>{"Pause"}</button> }
    } else {
        html! { <button onclick={link.callback(|_| Msg::Play)} disabled={empty}>{"Play"}</button> }
    };

    html! {
        <div class="preview-player" ref={component.container_ref.clone()}>
            <CanvasEditor
                document={props.document.clone()}
                mode={CanvasMode::Preview}
                current_data={player.current_values(iterations).cloned()}
            />
            <div class="player-controls">
                <button onclick={link.callback(|_| Msg::Previous)} disabled={empty}>{"Previous"}</button>
                { play_pause }
                <button onclick={link.callback(|_| Msg::Next)} disabled={empty}>{"Next"}</button>
                <span class="player-status">{ player.status_label(iterations) }</span>
                <button onclick={link.callback(|_| Msg::ToggleFullscreen)}>{"Fullscreen"}</button>
                {
                    if props.shareable {
                        html! {
                            <>
                                <button onclick={link.callback(|_| Msg::Share)} disabled={component.busy}>{"Share"}</button>
                                if component.shared.is_some() {
                                    <button onclick={link.callback(|_| Msg::Unshare)} disabled={component.busy}>{"Unshare"}</button>
                                }
                            </>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>
        </div>
    }
}

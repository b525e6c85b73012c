use yew::prelude::*;

use crate::hooks::use_reveal;
use crate::state::reveal::transition_delay;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Entrance offset, for staggering siblings.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", state.visible().then(|| "reveal--visible"), props.class.clone())}
            style={transition_delay(props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

use yew::prelude::*;

use crate::reveal::{schedule, RevealTiming, Split};

pub fn delay_style(delay: f64) -> String {
    format!("transition-delay: {:.3}s;", delay)
}

#[derive(Properties, PartialEq)]
pub struct StaggerTextProps {
    pub text: AttrValue,
    pub split: Split,
    pub timing: RevealTiming,
    #[prop_or_default]
    pub class: Classes,
}

/// Splits `text` and gives every piece its own staggered start delay. The
/// pieces animate once an ancestor gains the `revealed` class.
#[function_component(StaggerText)]
pub fn stagger_text(props: &StaggerTextProps) -> Html {
    let pieces = schedule(props.split.apply(&props.text), props.timing);
    let kind = match props.split {
        Split::Words => "reveal-word",
        Split::Chars => "reveal-char",
    };

    html! {
        <>
            { for pieces.into_iter().map(|piece| html! {
                <span
                    class={classes!("reveal-item", kind, props.class.clone())}
                    style={delay_style(piece.delay)}
                >
                    {piece.item}
                </span>
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn delay_style_uses_millisecond_precision() {
        assert_eq!(delay_style(1.78), "transition-delay: 1.780s;");
        assert_eq!(delay_style(0.0), "transition-delay: 0.000s;");
    }
}

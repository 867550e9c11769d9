use yew::prelude::*;

/// Emoji stand-ins for an icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Arrow,
    Brain,
    Check,
    CheckCircle,
    Dna,
    Ear,
    Eye,
    Lock,
    Package,
    Pin,
    ShieldAlert,
    ShieldCheck,
    Sparkles,
    Star,
    Type,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Arrow => "→",
            Icon::Brain => "🧠",
            Icon::Check => "✓",
            Icon::CheckCircle => "✅",
            Icon::Dna => "🧬",
            Icon::Ear => "👂",
            Icon::Eye => "👁",
            Icon::Lock => "🔒",
            Icon::Package => "📦",
            Icon::Pin => "📌",
            Icon::ShieldAlert => "⚠",
            Icon::ShieldCheck => "🛡",
            Icon::Sparkles => "✨",
            Icon::Star => "★",
            Icon::Type => "🔤",
            Icon::Zap => "⚡",
        }
    }

    pub fn view(self) -> Html {
        html! { <span class="icon" aria-hidden="true">{self.glyph()}</span> }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Less vertical padding.
    #[prop_or_default]
    pub tight: bool,
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class={classes!("page-section", props.tight.then(|| "tight"), props.class.clone())}
        >
            <div class="section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Renders the button inside a plain link when set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let button = html! {
        <button class={classes!("cta-button", props.class.clone())} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    };

    match &props.href {
        Some(href) => html! { <a class="cta-link" href={href.clone()}>{button}</a> },
        None => button,
    }
}


use yew::prelude::*;

/// Open/closed state of one accordion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn toggle(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(&'static str),
    List {
        intro: &'static str,
        items: &'static [&'static str],
    },
}

impl Answer {
    pub fn render(&self) -> Html {
        match self {
            Answer::Text(text) => html! { <p>{*text}</p> },
            Answer::List { intro, items } => html! {
                <>
                    <p>{*intro}</p>
                    <ul>
                        { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                </>
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: Answer,
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let state = use_state(Disclosure::default);

    let toggle = {
        let state = state.clone();
        let question = props.question.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = state.toggle();
            log::debug!("faq {:?}: {}", next, question);
            state.set(next);
        })
    };

    html! {
        <div class={classes!("faq-item", state.is_open().then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if state.is_open() { "−" } else { "+" }}</span>
            </button>
            {
                if state.is_open() {
                    html! {
                        <div class="faq-answer">
                            { for props.children.iter() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.entries.iter().map(|entry| html! {
                <FaqItem key={entry.question} question={entry.question}>
                    { entry.answer.render() }
                </FaqItem>
            }) }
        </div>
    }
}

use yew::prelude::*;

use crate::components::layout::Icon;
use crate::content::{Bonus, BonusBody, KitItem, OfferItem, Tag, Testimonial, ValueProp};

#[derive(Properties, PartialEq)]
pub struct TagChipProps {
    pub tag: &'static Tag,
}

#[function_component(TagChip)]
pub fn tag_chip(props: &TagChipProps) -> Html {
    let tag = props.tag;
    html! {
        <div class="tag-chip" style={format!("background: {};", tag.color)}>
            { tag.icon.view() }
            {" "}{tag.label}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ValuePropCardProps {
    pub prop: &'static ValueProp,
}

#[function_component(ValuePropCard)]
pub fn value_prop_card(props: &ValuePropCardProps) -> Html {
    html! {
        <div class="value-card" style={format!("border-color: {};", props.prop.accent)}>
            { Icon::CheckCircle.view() }
            <span class="value-text">{props.prop.text}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct KitCardProps {
    pub item: &'static KitItem,
}

#[function_component(KitCard)]
pub fn kit_card(props: &KitCardProps) -> Html {
    let item = props.item;
    html! {
        <div class="kit-card">
            <h3>
                <span class="kit-number">{item.number}</span>
                {item.title}
            </h3>
            <ul class="check-list">
                { for item.points.iter().map(|point| html! {
                    <li>{ Icon::Check.view() }{*point}</li>
                }) }
            </ul>
            <div class="kit-note">
                { Icon::Pin.view() }
                <p>{item.note}</p>
            </div>
        </div>
    }
}

fn bonus_body(body: &BonusBody) -> Html {
    match body {
        BonusBody::Line(line) => html! { <p class="bonus-line">{*line}</p> },
        BonusBody::Bullets(bullets) => html! {
            <ul class="bonus-bullets">
                { for bullets.iter().map(|b| html! { <li>{*b}</li> }) }
            </ul>
        },
        BonusBody::Tags { heading, tags } => html! {
            <div class="bonus-tags">
                <p class="bonus-tags-heading">{*heading}</p>
                <p class="bonus-tags-list">{tags.join(" • ")}</p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct BonusCardProps {
    pub bonus: &'static Bonus,
}

#[function_component(BonusCard)]
pub fn bonus_card(props: &BonusCardProps) -> Html {
    let bonus = props.bonus;
    html! {
        <div class="bonus-card">
            <div class="bonus-value">{format!("VALIA {}", bonus.value)}</div>
            <div class="bonus-icon">{ Icon::Package.view() }</div>
            <h4>{bonus.title}</h4>
            <p class="bonus-subtitle">{bonus.subtitle}</p>
            <p class="bonus-quote">{format!("“{}”", bonus.quote)}</p>
            { bonus_body(&bonus.body) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: &'static Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;
    html! {
        <div class="testimonial-card">
            <div class="stars">
                { for (0..5).map(|_| Icon::Star.view()) }
            </div>
            <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
            <div class="testimonial-author">
                <div class="avatar">{t.initial()}</div>
                <div>
                    <h4>{t.name}</h4>
                    <p class="testimonial-role">{t.role}</p>
                </div>
            </div>
        </div>
    }
}

pub fn offer_item_row(item: &OfferItem) -> Html {
    html! {
        <div class="offer-item">
            { Icon::CheckCircle.view() }
            <span class={classes!("offer-item-text", item.bold.then(|| "bold"))}>{item.text}</span>
        </div>
    }
}

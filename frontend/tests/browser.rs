#![cfg(target_arch = "wasm32")]

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use pei_landing::components::carousel::{Carousel, CarouselProps, Gallery};
use pei_landing::components::countdown::{use_interval_tick, OfferCountdown, OfferCountdownProps};
use pei_landing::components::faq::{FaqList, FaqListProps};
use pei_landing::content::{PEI_KIT, SAMPLES};
use pei_landing::scroll::{scroll_to_anchor, DocumentScroll};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn all(root: &Element, selector: &str) -> Vec<Element> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.dyn_into::<Element>().unwrap())
        .collect()
}

fn click(element: &Element) {
    element.clone().dyn_into::<HtmlElement>().unwrap().click();
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn clock(root: &Element) -> String {
    root.query_selector(".countdown-clock")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn shown_image(root: &Element) -> String {
    root.query_selector(".carousel-image")
        .unwrap()
        .unwrap()
        .get_attribute("src")
        .unwrap()
}

#[wasm_bindgen_test]
async fn clicking_a_question_opens_only_that_answer() {
    let root = mount_point();
    yew::Renderer::<FaqList>::with_root_and_props(root.clone(), FaqListProps { entries: PEI_KIT.faq })
        .render();
    settle().await;

    let questions = all(&root, ".faq-question");
    assert_eq!(questions.len(), 5);
    assert!(all(&root, ".faq-answer").is_empty());

    click(&questions[2]);
    settle().await;

    let items = all(&root, ".faq-item");
    let open: Vec<usize> = (0..items.len())
        .filter(|&i| items[i].query_selector(".faq-answer").unwrap().is_some())
        .collect();
    assert_eq!(open, vec![2]);

    click(&questions[2]);
    settle().await;
    assert!(all(&root, ".faq-answer").is_empty());
}

#[wasm_bindgen_test]
async fn carousel_controls_move_the_slide() {
    let root = mount_point();
    yew::Renderer::<Carousel>::with_root_and_props(root.clone(), CarouselProps { gallery: &SAMPLES })
        .render();
    settle().await;
    assert_eq!(shown_image(&root), SAMPLES.image(0));

    click(&all(&root, ".carousel-nav.prev")[0]);
    settle().await;
    assert_eq!(shown_image(&root), SAMPLES.image(4));

    let next = &all(&root, ".carousel-nav.next")[0];
    click(next);
    click(next);
    settle().await;
    assert_eq!(shown_image(&root), SAMPLES.image(1));

    click(&all(&root, ".carousel-dot")[3]);
    settle().await;
    assert_eq!(shown_image(&root), SAMPLES.image(3));

    let active = all(&root, ".carousel-dot.active");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].get_attribute("aria-label").as_deref(), Some("Ir para 4"));
}

#[wasm_bindgen_test]
async fn countdown_ticks_down_to_zero_and_stops() {
    let root = mount_point();
    yew::Renderer::<OfferCountdown>::with_root_and_props(root.clone(), OfferCountdownProps { start: 3 })
        .render();
    settle().await;

    assert_eq!(clock(&root), "0:03");

    TimeoutFuture::new(1_500).await;
    assert_eq!(clock(&root), "0:02");

    TimeoutFuture::new(3_000).await;
    assert_eq!(clock(&root), "0:00");
    assert_eq!(all(&root, ".offer-countdown.expired").len(), 1);
}

thread_local! {
    static TICKS: Cell<u32> = Cell::new(0);
}

#[function_component(TickCounter)]
fn tick_counter() -> Html {
    use_interval_tick(50, Callback::from(|_: ()| TICKS.with(|t| t.set(t.get() + 1))));
    html! { <span class="tick-counter" /> }
}

#[wasm_bindgen_test]
async fn interval_stops_once_unmounted() {
    let handle = yew::Renderer::<TickCounter>::with_root(mount_point()).render();
    TimeoutFuture::new(300).await;
    let while_mounted = TICKS.with(Cell::get);
    assert!(while_mounted > 0);

    handle.destroy();
    settle().await;
    let at_teardown = TICKS.with(Cell::get);

    TimeoutFuture::new(300).await;
    assert_eq!(TICKS.with(Cell::get), at_teardown);
}

#[wasm_bindgen_test]
async fn remounted_countdown_starts_over() {
    let root = mount_point();
    let handle =
        yew::Renderer::<OfferCountdown>::with_root_and_props(root.clone(), OfferCountdownProps { start: 3 })
            .render();
    TimeoutFuture::new(1_500).await;
    assert_eq!(clock(&root), "0:02");
    handle.destroy();
    settle().await;

    let root = mount_point();
    yew::Renderer::<OfferCountdown>::with_root_and_props(root.clone(), OfferCountdownProps { start: 3 })
        .render();
    settle().await;
    assert_eq!(clock(&root), "0:03");
}

static PAIR: Gallery = Gallery::new(
    "Depoimento",
    &["https://img.example.com/depoimento-1.png", "https://img.example.com/depoimento-2.png"],
);

#[function_component(GallerySwitch)]
fn gallery_switch() -> Html {
    let showing_pair = use_state(|| false);
    let gallery: &'static Gallery = if *showing_pair { &PAIR } else { &SAMPLES };
    let swap = {
        let showing_pair = showing_pair.clone();
        Callback::from(move |_: MouseEvent| showing_pair.set(!*showing_pair))
    };

    html! {
        <>
            <button class="swap-gallery" onclick={swap} />
            <Carousel {gallery} />
        </>
    }
}

#[wasm_bindgen_test]
async fn swapping_the_gallery_restarts_the_carousel() {
    let root = mount_point();
    yew::Renderer::<GallerySwitch>::with_root(root.clone()).render();
    settle().await;

    click(&all(&root, ".carousel-dot")[4]);
    settle().await;
    assert_eq!(shown_image(&root), SAMPLES.image(4));

    click(&all(&root, ".swap-gallery")[0]);
    settle().await;

    let dots = all(&root, ".carousel-dot");
    assert_eq!(dots.len(), 2);
    assert_eq!(all(&root, ".carousel-dot.active").len(), 1);
    assert_eq!(dots[0].get_attribute("class").as_deref(), Some("carousel-dot active"));
    assert_eq!(shown_image(&root), PAIR.image(0));

    click(&all(&root, ".carousel-nav.next")[0]);
    settle().await;
    assert_eq!(shown_image(&root), PAIR.image(1));
}

#[wasm_bindgen_test]
fn scroll_only_when_anchor_is_present() {
    let document = web_sys::window().unwrap().document().unwrap();
    assert!(!scroll_to_anchor(&DocumentScroll, "scroll-test-anchor"));

    let anchor = document.create_element("section").unwrap();
    anchor.set_id("scroll-test-anchor");
    document.body().unwrap().append_child(&anchor).unwrap();
    assert!(scroll_to_anchor(&DocumentScroll, "scroll-test-anchor"));
}

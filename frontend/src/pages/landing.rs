use yew::prelude::*;

use crate::components::cards::{
    offer_item_row, BonusCard, KitCard, TagChip, TestimonialCard, ValuePropCard,
};
use crate::components::carousel::Carousel;
use crate::components::countdown::OfferCountdown;
use crate::components::faq::FaqList;
use crate::components::layout::{Badge, CtaButton, Icon, Section};
use crate::config;
use crate::content::{self, Offer};
use crate::scroll::scroll_to_offer;

/// Appends the autoplay-muted flags to a video embed URL.
pub fn autoplay_muted(url: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}autoplay=1&mute=1", url, sep)
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or(&content::PEI_KIT)]
    pub offer: &'static Offer,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let offer = props.offer;

    let to_offer = Callback::from(|_: MouseEvent| scroll_to_offer());

    let on_checkout = {
        let url = offer.checkout_url;
        Callback::from(move |_: MouseEvent| {
            log::info!("leaving for checkout at {}", url);
        })
    };

    html! {
        <div class="landing-page">
            <div class="top-banner">
                { Icon::Sparkles.view() }
                {offer.banner}
            </div>

            <header class="hero">
                <div class="hero-content">
                    <h1>
                        {offer.headline}{" "}
                        <span class="highlight">{offer.headline_highlight}</span>
                    </h1>
                    <p class="hero-subtitle">{offer.subtitle}</p>
                    <div class="hero-mockup">
                        <img
                            src={offer.mockup}
                            alt={format!("Mockup {}", offer.product_name)}
                            referrerpolicy="no-referrer"
                        />
                    </div>
                    <div class="tag-cloud">
                        { for offer.tags.iter().map(|tag| html! { <TagChip key={tag.label} tag={tag} /> }) }
                    </div>
                    <CtaButton class="hero-cta" onclick={to_offer.clone()}>
                        {offer.hero_cta}{" "}{ Icon::Arrow.view() }
                    </CtaButton>
                    <div class="trust-row">
                        <span>{ Icon::ShieldCheck.view() }{" Compra Segura"}</span>
                        <span class="dot"></span>
                        <span>{ Icon::Zap.view() }{" Acesso Imediato"}</span>
                    </div>
                </div>
            </header>

            <div class="stats-bar">
                { for offer.stats.iter().map(|stat| html! {
                    <div class="stat" key={stat.label}>
                        <div class="stat-figure">{stat.figure}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
                <div class="stat">
                    <div class="stat-figure">{offer.bonus_figure()}</div>
                    <div class="stat-label">{"Bônus Exclusivos"}</div>
                </div>
            </div>

            <Section class="value-section" tight=true>
                <h2 class="section-heading">{offer.value_heading}</h2>
                <div class="value-grid">
                    { for offer.value_props.iter().map(|prop| html! { <ValuePropCard key={prop.text} prop={prop} /> }) }
                </div>
                <div class="value-closing">
                    { for offer.value_closing.iter().map(|line| html! { <p>{*line}</p> }) }
                </div>
            </Section>

            <Section class="kit-section">
                <div class="section-header">
                    <Badge>{offer.kit_badge}</Badge>
                    <h2 class="section-heading">{offer.kit_heading}</h2>
                    <p class="section-subtitle">{offer.kit_subtitle}</p>
                </div>
                <div class="kit-grid">
                    { for offer.kit_items.iter().map(|item| html! { <KitCard key={item.title} item={item} /> }) }
                </div>
                <CtaButton class="green" onclick={to_offer.clone()}>{offer.kit_cta}</CtaButton>
            </Section>

            <Section class="samples-section">
                <div class="section-header">
                    <h2 class="section-heading">{offer.samples_heading}</h2>
                    <p class="section-subtitle">
                        {"Confira a qualidade técnica do conteúdo: "}
                        <span class="accent">{offer.samples_note}</span>
                    </p>
                </div>
                <Carousel gallery={offer.samples} />
            </Section>

            {
                if let Some(video) = offer.video {
                    html! {
                        <Section class="video-section" tight=true>
                            <div class="video-frame">
                                <iframe
                                    src={autoplay_muted(video)}
                                    title={offer.product_name}
                                    allow="autoplay; encrypted-media; picture-in-picture"
                                    allowfullscreen=true
                                    frameborder="0"
                                />
                            </div>
                        </Section>
                    }
                } else {
                    html! {}
                }
            }

            <Section class="bonus-section">
                <div class="section-header">
                    <Badge>{"BÔNUS EXCLUSIVOS"}</Badge>
                    <h2 class="section-heading">{offer.bonus_heading}</h2>
                    <p class="section-subtitle">{offer.bonus_subtitle}</p>
                </div>
                <div class="bonus-grid">
                    { for offer.bonuses.iter().map(|bonus| html! { <BonusCard key={bonus.title} bonus={bonus} /> }) }
                </div>
            </Section>

            {
                if let Some(proofs) = offer.proofs {
                    html! {
                        <Section class="proofs-section">
                            <div class="section-header">
                                <h2 class="section-heading">{offer.proofs_heading}</h2>
                            </div>
                            <Carousel gallery={proofs} />
                        </Section>
                    }
                } else {
                    html! {}
                }
            }

            <Section class="testimonials-section">
                <div class="section-header">
                    <Badge>{"O que dizem os educadores"}</Badge>
                    <h2 class="section-heading">{offer.testimonials_heading}</h2>
                </div>
                <div class="testimonial-grid">
                    { for offer.testimonials.iter().map(|testimonial| html! {
                        <TestimonialCard key={testimonial.name} testimonial={testimonial} />
                    }) }
                </div>
            </Section>

            <Section id={config::OFFER_ANCHOR} class="pricing-section">
                <div class="pricing-panel">
                    <div class="pricing-header">
                        <Badge class="light">{"Oportunidade Única"}</Badge>
                        <h3>{"OFERTA DE LANÇAMENTO"}</h3>
                        <OfferCountdown />
                    </div>
                    <div class="pricing-body">
                        <h4>{ Icon::Sparkles.view() }{" "}{offer.offer_heading}</h4>
                        <div class="offer-items">
                            { for offer.offer_items.iter().map(offer_item_row) }
                        </div>
                        <div class="price-box">
                            <p class="old-price">{format!("De {}", offer.old_price)}</p>
                            <div class="current-price">
                                <span class="por">{"Por"}</span>
                                <span class="price">{offer.price.to_string()}</span>
                            </div>
                            <div class="payment-note">{offer.payment_note}</div>
                        </div>
                        <CtaButton class="green checkout" href={offer.checkout_url} onclick={on_checkout}>
                            {offer.checkout_label}{" "}{ Icon::Arrow.view() }
                        </CtaButton>
                        <div class="pricing-trust">
                            <div>{ Icon::ShieldCheck.view() }{"COMPRA 100% SEGURA"}</div>
                            <div>{ Icon::Zap.view() }{"ACESSO IMEDIATO"}</div>
                            <div>{ Icon::Package.view() }{"VITALÍCIO"}</div>
                        </div>
                    </div>
                </div>
            </Section>

            <Section class="guarantee-section">
                <div class="guarantee">
                    <img
                        class="guarantee-seal"
                        src={offer.guarantee_seal}
                        alt={format!("Garantia de {} Dias", offer.guarantee_days)}
                        referrerpolicy="no-referrer"
                    />
                    <div>
                        <h2>{"Sua satisfação garantida ou seu dinheiro de volta"}</h2>
                        <p>
                            {"Fique tranquilo! Você tem "}
                            <strong>{format!("{} dias de garantia incondicional", offer.guarantee_days)}</strong>
                            {". Se por qualquer motivo você achar que o material não é para você, basta nos enviar um e-mail e devolvemos 100% do seu investimento."}
                        </p>
                        <div class="guarantee-pills">
                            <span>{ Icon::Lock.view() }{" Compra 100% Segura"}</span>
                            <span>{ Icon::ShieldCheck.view() }{" Acesso Imediato"}</span>
                        </div>
                    </div>
                </div>
            </Section>

            <Section class="faq-section">
                <div class="section-header">
                    <h2>{"Dúvidas Frequentes"}</h2>
                    <p>{"Tudo o que você precisa saber sobre o material."}</p>
                </div>
                <FaqList entries={offer.faq} />
            </Section>

            <footer class="page-footer">
                <div class="footer-brand">{offer.product_name}</div>
                <p>{offer.copyright}</p>
            </footer>

            <style>
                {LANDING_CSS}
            </style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
:root {
    --brand-blue: #0b2a6f;
    --brand-blue-light: #143a8f;
    --brand-yellow: #facc15;
    --brand-cream: #fdfaf3;
    --ink: #1e293b;
}

.landing-page {
    min-height: 100vh;
    background: var(--brand-cream);
    color: var(--ink);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

.icon {
    display: inline-block;
    line-height: 1;
}

.top-banner {
    position: sticky;
    top: 0;
    z-index: 60;
    background: var(--brand-blue);
    color: #fff;
    padding: 0.75rem 1rem;
    text-align: center;
    font-weight: 700;
    font-size: 0.85rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
}

.hero {
    background: var(--brand-blue);
    padding: 5rem 1rem 6rem;
    text-align: center;
    color: #fff;
}

.hero-content {
    max-width: 72rem;
    margin: 0 auto;
}

.hero h1 {
    font-size: clamp(2rem, 6vw, 5.5rem);
    font-weight: 900;
    line-height: 1.05;
    text-transform: uppercase;
    margin-bottom: 1rem;
}

.hero .highlight {
    color: #ef4444;
    background: linear-gradient(transparent 60%, rgba(250, 204, 21, 0.8) 60%);
}

.hero-subtitle {
    font-size: 1.4rem;
    font-weight: 700;
    max-width: 56rem;
    margin: 0 auto 3rem;
}

.hero-mockup img {
    width: 100%;
    height: auto;
    filter: drop-shadow(0 35px 35px rgba(0, 0, 0, 0.5));
}

.tag-cloud {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.5rem;
    margin: 3rem 0;
}

.tag-chip {
    color: #fff;
    padding: 0.5rem 1.25rem;
    border-radius: 0.75rem;
    font-weight: 900;
    font-size: 0.85rem;
    text-transform: uppercase;
}

.trust-row {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 1rem;
    margin-top: 1.5rem;
    color: rgba(255, 255, 255, 0.6);
    font-weight: 700;
    text-transform: uppercase;
    font-size: 0.8rem;
}

.trust-row .dot {
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.2);
}

.stats-bar {
    background: var(--brand-blue-light);
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    padding: 3rem 1rem;
    text-align: center;
}

.stat-figure {
    font-family: Georgia, serif;
    font-size: 3.5rem;
    color: var(--brand-yellow);
}

.stat-label {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.page-section {
    padding: 6rem 1.5rem;
}

.page-section.tight {
    padding: 4rem 1.5rem;
}

.section-inner {
    max-width: 56rem;
    margin: 0 auto;
}

.section-header {
    text-align: center;
    margin-bottom: 4rem;
}

.section-heading {
    font-size: clamp(1.6rem, 4vw, 3.5rem);
    font-weight: 900;
    color: var(--brand-blue);
    text-transform: uppercase;
    line-height: 1.05;
}

.section-subtitle {
    font-size: 1.3rem;
    font-weight: 700;
    color: #64748b;
}

.section-subtitle .accent {
    color: #2563eb;
    font-style: italic;
    font-weight: 900;
}

.badge {
    display: inline-flex;
    padding: 0.6rem 1.5rem;
    border-radius: 999px;
    background: var(--brand-blue);
    color: #fff;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin-bottom: 1.5rem;
}

.badge.light {
    background: rgba(255, 255, 255, 0.2);
    border: 1px solid rgba(255, 255, 255, 0.3);
}

.cta-link {
    display: block;
    width: 100%;
    text-decoration: none;
}

.cta-button {
    width: 100%;
    max-width: 42rem;
    margin: 0 auto;
    padding: 1.5rem 2.5rem;
    border: none;
    border-radius: 1rem;
    font-weight: 800;
    font-size: 1.5rem;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
    transition: transform 0.2s ease;
}

.cta-button:hover {
    transform: translateY(-4px);
}

.cta-button.hero-cta {
    max-width: 28rem;
    border-radius: 999px;
    background: var(--brand-yellow);
    color: var(--brand-blue);
}

.cta-button.green {
    background: #22c55e;
    color: #fff;
    border-bottom: 8px solid #15803d;
}

.value-grid,
.kit-grid,
.bonus-grid,
.testimonial-grid {
    display: grid;
    gap: 2rem;
}

.value-grid { grid-template-columns: repeat(3, 1fr); }
.kit-grid,
.bonus-grid { grid-template-columns: repeat(2, 1fr); margin-bottom: 4rem; }
.testimonial-grid { grid-template-columns: repeat(3, 1fr); }

.value-card {
    background: #fff;
    border: 2px solid;
    border-radius: 1.5rem;
    padding: 2.5rem;
    display: flex;
    align-items: center;
    gap: 1rem;
    font-size: 1.25rem;
    font-weight: 900;
}

.value-closing {
    margin-top: 4rem;
    text-align: center;
    font-size: 1.5rem;
    font-weight: 900;
    color: var(--brand-blue);
}

.kit-card {
    background: var(--brand-cream);
    border: 2px solid #f1f5f9;
    border-radius: 2rem;
    padding: 2rem;
}

.kit-card h3 {
    color: var(--brand-blue);
    font-weight: 900;
    text-transform: uppercase;
}

.kit-number {
    margin-right: 0.5rem;
}

.check-list li {
    list-style: none;
    font-weight: 700;
    color: #475569;
    margin: 0.5rem 0;
}

.check-list .icon {
    color: #16a34a;
    margin-right: 0.5rem;
}

.kit-note {
    display: flex;
    gap: 0.5rem;
    background: #fff;
    border: 1px solid #e2e8f0;
    border-radius: 1rem;
    padding: 1rem;
    font-weight: 900;
    color: var(--brand-blue);
}

.samples-section {
    background: #eff6ff;
}

.carousel {
    position: relative;
}

.carousel-stage {
    position: relative;
}

.carousel-frame {
    background: #fff;
    padding: 1rem;
    border: 8px solid #3b82f6;
    border-radius: 2rem;
    aspect-ratio: 4 / 3;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.carousel-image {
    width: 100%;
    height: 100%;
    object-fit: contain;
    user-select: none;
}

.carousel-nav {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    background: #fff;
    border: none;
    border-radius: 50%;
    width: 3rem;
    height: 3rem;
    font-size: 1.5rem;
    cursor: pointer;
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.2);
}

.carousel-nav.prev { left: -1.5rem; }
.carousel-nav.next { right: -1.5rem; }

.carousel-dots {
    margin-top: 2rem;
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.carousel-dot {
    width: 0.75rem;
    height: 0.75rem;
    border: none;
    border-radius: 999px;
    background: #cbd5e1;
    cursor: pointer;
    transition: width 0.2s ease;
}

.carousel-dot.active {
    width: 2rem;
    background: #2563eb;
}

.video-frame {
    position: relative;
    padding-top: 56.25%;
    border-radius: 1.5rem;
    overflow: hidden;
}

.video-frame iframe {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
}

.bonus-card {
    position: relative;
    background: #fff;
    border: 1px solid #f1f5f9;
    border-radius: 1.5rem;
    padding: 2rem;
    overflow: hidden;
}

.bonus-value {
    position: absolute;
    top: 0;
    right: 0;
    background: var(--brand-yellow);
    color: var(--brand-blue);
    font-weight: 700;
    font-size: 0.75rem;
    padding: 0.25rem 1rem;
    border-bottom-left-radius: 0.75rem;
}

.bonus-subtitle,
.bonus-quote {
    font-style: italic;
    color: #64748b;
}

.bonus-tags-list {
    color: var(--brand-blue);
    font-weight: 900;
}

.testimonials-section,
.faq-section {
    background: var(--brand-cream);
}

.testimonial-card {
    background: #fff;
    border-radius: 2rem;
    padding: 2rem;
    display: flex;
    flex-direction: column;
}

.stars {
    color: var(--brand-yellow);
    margin-bottom: 1.5rem;
}

.testimonial-text {
    flex-grow: 1;
    font-style: italic;
    font-weight: 700;
    color: #475569;
}

.testimonial-author {
    display: flex;
    align-items: center;
    gap: 1rem;
    border-top: 1px solid #f8fafc;
    padding-top: 1.5rem;
}

.avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: var(--brand-blue);
    color: #fff;
    font-weight: 900;
    font-size: 1.25rem;
    display: flex;
    align-items: center;
    justify-content: center;
}

.testimonial-role {
    font-size: 0.65rem;
    color: #94a3b8;
    text-transform: uppercase;
}

.pricing-section {
    background: var(--brand-blue);
    padding-bottom: 12rem;
}

.pricing-panel {
    background: #fff;
    border: 4px solid #1e293b;
    border-radius: 3rem;
    overflow: hidden;
}

.pricing-header {
    background: var(--brand-blue);
    color: #fff;
    text-align: center;
    padding: 3rem 1.5rem;
}

.pricing-header h3 {
    font-size: 3rem;
    font-weight: 900;
    font-style: italic;
}

.offer-countdown {
    display: inline-flex;
    gap: 0.5rem;
    align-items: baseline;
    background: #ef4444;
    color: #fff;
    border-radius: 999px;
    padding: 0.5rem 1.5rem;
    font-weight: 900;
}

.offer-countdown.expired {
    background: #64748b;
}

.countdown-clock {
    font-variant-numeric: tabular-nums;
    font-size: 1.4rem;
}

.pricing-body {
    padding: 3rem;
}

.offer-items {
    display: grid;
    gap: 0.75rem;
    margin-bottom: 3rem;
}

.offer-item {
    display: flex;
    gap: 0.75rem;
    padding: 0.75rem;
    background: #f8fafc;
    border: 1px solid #f1f5f9;
    border-radius: 0.75rem;
}

.offer-item-text {
    font-weight: 700;
}

.offer-item-text.bold {
    font-weight: 900;
}

.price-box {
    text-align: center;
    background: var(--brand-cream);
    border: 2px solid #e2e8f0;
    border-radius: 1.5rem;
    padding: 2.5rem;
    margin-bottom: 1.5rem;
}

.old-price {
    font-size: 1.8rem;
    color: #94a3b8;
    text-decoration: line-through;
}

.current-price .price {
    font-size: clamp(3rem, 10vw, 8rem);
    font-weight: 900;
    color: #16a34a;
}

.payment-note {
    display: inline-block;
    color: #15803d;
    border: 2px solid #dcfce7;
    border-radius: 999px;
    padding: 0.75rem 2.5rem;
    font-weight: 900;
    letter-spacing: 0.1em;
}

.pricing-trust {
    margin-top: 2.5rem;
    padding-top: 2.5rem;
    border-top: 1px solid #f1f5f9;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    text-align: center;
    font-size: 0.75rem;
    font-weight: 900;
    color: #94a3b8;
}

.guarantee {
    display: flex;
    align-items: center;
    gap: 5rem;
}

.guarantee-seal {
    width: 16rem;
    height: 16rem;
    object-fit: contain;
}

.guarantee-pills {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.guarantee-pills span {
    background: var(--brand-cream);
    color: var(--brand-blue);
    border-radius: 999px;
    padding: 0.75rem 1.5rem;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
}

.faq-list {
    max-width: 48rem;
    margin: 0 auto;
}

.faq-item {
    border: 2px solid #f1f5f9;
    border-radius: 1rem;
    background: #fff;
    margin-bottom: 0.75rem;
    overflow: hidden;
}

.faq-question {
    width: 100%;
    padding: 1.25rem;
    display: flex;
    justify-content: space-between;
    gap: 1rem;
    text-align: left;
    font-weight: 700;
    background: none;
    border: none;
    cursor: pointer;
}

.faq-item.open .toggle-icon {
    color: #2563eb;
}

.faq-answer {
    padding: 0 1.25rem 1.25rem;
    color: #475569;
    border-top: 2px solid #f8fafc;
}

.page-footer {
    background: var(--brand-blue);
    color: #fff;
    padding: 5rem 1.5rem;
    text-align: center;
}

.footer-brand {
    font-family: Georgia, serif;
    font-style: italic;
    font-size: 2rem;
    color: var(--brand-yellow);
    margin-bottom: 2rem;
}

.page-footer p {
    color: rgba(255, 255, 255, 0.4);
    font-size: 0.85rem;
    letter-spacing: 0.3em;
    font-weight: 700;
}

@media (max-width: 768px) {
    .stats-bar { grid-template-columns: repeat(2, 1fr); }
    .value-grid,
    .kit-grid,
    .bonus-grid,
    .testimonial-grid { grid-template-columns: 1fr; }
    .guarantee { flex-direction: column; gap: 3rem; }
    .carousel-frame { aspect-ratio: 3 / 4; border-width: 4px; }
    .carousel-nav.prev { left: 0.5rem; }
    .carousel-nav.next { right: 0.5rem; }
    .pricing-body { padding: 1.5rem; }
    .cta-button { font-size: 1.1rem; padding: 1rem 1.5rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_flags_respect_existing_query() {
        assert_eq!(
            autoplay_muted("https://player.example.com/embed/abc"),
            "https://player.example.com/embed/abc?autoplay=1&mute=1"
        );
        assert_eq!(
            autoplay_muted("https://player.example.com/embed/abc?rel=0"),
            "https://player.example.com/embed/abc?rel=0&autoplay=1&mute=1"
        );
    }
}

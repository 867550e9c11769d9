//! Copy, prices and image tables for the landing page. Everything here is
//! fixed at compile time; the page only reads it.

use std::fmt;

use crate::components::carousel::Gallery;
use crate::components::faq::{Answer, FaqEntry};
use crate::components::layout::Icon;
use crate::config;

/// Amount in centavos, shown as Brazilian Real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(pub u32);

impl Price {
    /// `1.234,56` without the currency symbol.
    pub fn amount(self) -> String {
        let reais = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, digit) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        format!("{},{:02}", grouped, self.0 % 100)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}", self.amount())
    }
}

#[derive(Debug, PartialEq)]
pub struct Tag {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ValueProp {
    pub text: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct KitItem {
    pub number: u8,
    pub title: &'static str,
    pub points: &'static [&'static str],
    pub note: &'static str,
}

#[derive(Debug, PartialEq)]
pub enum BonusBody {
    Line(&'static str),
    Bullets(&'static [&'static str]),
    Tags {
        heading: &'static str,
        tags: &'static [&'static str],
    },
}

#[derive(Debug, PartialEq)]
pub struct Bonus {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub value: Price,
    pub quote: &'static str,
    pub body: BonusBody,
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, PartialEq)]
pub struct OfferItem {
    pub text: &'static str,
    pub bold: bool,
}

/// One complete variant of the sales page.
#[derive(Debug, PartialEq)]
pub struct Offer {
    pub product_name: &'static str,
    pub banner: &'static str,
    pub headline: &'static str,
    pub headline_highlight: &'static str,
    pub subtitle: &'static str,
    pub mockup: &'static str,
    pub hero_cta: &'static str,
    pub tags: &'static [Tag],
    pub stats: &'static [Stat],
    pub value_heading: &'static str,
    pub value_props: &'static [ValueProp],
    pub value_closing: &'static [&'static str],
    pub kit_badge: &'static str,
    pub kit_heading: &'static str,
    pub kit_subtitle: &'static str,
    pub kit_items: &'static [KitItem],
    pub kit_cta: &'static str,
    pub samples_heading: &'static str,
    pub samples_note: &'static str,
    pub samples: &'static Gallery,
    /// Embed URL of the sales video, if the variant has one.
    pub video: Option<&'static str>,
    pub bonus_heading: &'static str,
    pub bonus_subtitle: &'static str,
    pub bonuses: &'static [Bonus],
    pub proofs_heading: &'static str,
    pub proofs: Option<&'static Gallery>,
    pub testimonials_heading: &'static str,
    pub testimonials: &'static [Testimonial],
    pub offer_heading: &'static str,
    pub offer_items: &'static [OfferItem],
    pub old_price: Price,
    pub price: Price,
    pub payment_note: &'static str,
    pub checkout_url: &'static str,
    pub checkout_label: &'static str,
    pub guarantee_seal: &'static str,
    pub guarantee_days: u8,
    pub faq: &'static [FaqEntry],
    pub copyright: &'static str,
}

impl Offer {
    /// Bonus count as shown in the stats bar, e.g. `09`.
    pub fn bonus_figure(&self) -> String {
        format!("{:02}", self.bonuses.len())
    }
}

pub static SAMPLES: Gallery = Gallery::new(
    "Amostra",
    &[
        "https://digitallfp.wordpress.com/wp-content/uploads/2026/02/11.png",
        "https://digitallfp.wordpress.com/wp-content/uploads/2026/02/12.png",
        "https://digitallfp.wordpress.com/wp-content/uploads/2026/02/13.png",
        "https://digitallfp.wordpress.com/wp-content/uploads/2026/02/14.png",
        "https://digitallfp.wordpress.com/wp-content/uploads/2026/02/15.png",
    ],
);

static TAGS: [Tag; 10] = [
    Tag { label: "Autismo (TEA)", color: "#7c3aed", icon: Icon::Brain },
    Tag { label: "TDAH", color: "#f59e0b", icon: Icon::Zap },
    Tag { label: "Dislexia", color: "#0ea5e9", icon: Icon::Type },
    Tag { label: "Intelectual", color: "#f472b6", icon: Icon::Dna },
    Tag { label: "TOD", color: "#ef4444", icon: Icon::ShieldAlert },
    Tag { label: "Down", color: "#10b981", icon: Icon::Star },
    Tag { label: "Física", color: "#3b82f6", icon: Icon::Package },
    Tag { label: "Visual", color: "#6366f1", icon: Icon::Eye },
    Tag { label: "Auditiva", color: "#f97316", icon: Icon::Ear },
    Tag { label: "Altas Habilidades", color: "#eab308", icon: Icon::Sparkles },
];

static STATS: [Stat; 3] = [
    Stat { figure: "150", label: "Modelos de PEIs" },
    Stat { figure: "14", label: "Tipos de Deficiências" },
    Stat { figure: "10", label: "Competências BNCC" },
];

static VALUE_PROPS: [ValueProp; 3] = [
    ValueProp { text: "PEI não deveria levar horas", accent: "#3b82f6" },
    ValueProp { text: "Você não precisa reinventar tudo", accent: "#ef4444" },
    ValueProp { text: "Seu tempo vale mais", accent: "#22c55e" },
];

static KIT_ITEMS: [KitItem; 4] = [
    KitItem {
        number: 1,
        title: "150 MODELOS DE PEIs PRONTOS (EDITÁVEIS)",
        points: &[
            "Modelos completos",
            "Estrutura já validada",
            "Linguagem técnica aceita por coordenação",
            "Prontos para adaptar em poucos minutos",
        ],
        note: "Você só ajusta para a realidade do aluno e entrega.",
    },
    KitItem {
        number: 2,
        title: "MODELOS DE PEI POR NECESSIDADE EDUCACIONAL",
        points: &[
            "Autismo (TEA)",
            "TDAH",
            "Dislexia",
            "Deficiência Intelectual",
            "Educação Infantil",
            "Ensino Fundamental",
        ],
        note: "Nada genérico. Modelos pensados para a sala de aula real.",
    },
    KitItem {
        number: 3,
        title: "MODELOS DE PDI (PLANO DE DESENVOLVIMENTO INDIVIDUAL)",
        points: &["Estrutura pronta", "Campos organizados", "Fácil de preencher", "Alinhado ao PEI"],
        note: "Ideal para relatórios e acompanhamento individual.",
    },
    KitItem {
        number: 4,
        title: "MODELO DE PAEE (ATENDIMENTO EDUCACIONAL ESPECIALIZADO)",
        points: &["Estrutura completa", "Objetivos claros", "Estratégias organizadas", "Pronto para editar"],
        note: "Você não precisa mais procurar modelo na internet.",
    },
];

static BONUSES: [Bonus; 9] = [
    Bonus {
        title: "🥇 BÔNUS 1",
        subtitle: "Banco de Objetivos para cada deficiência Prontos",
        value: Price(9700),
        quote: "Nunca mais trave na hora de escrever objetivos",
        body: BonusBody::Tags {
            heading: "Inclui objetivos prontos por:",
            tags: &["TEA", "TDAH", "DI", "Dislexia"],
        },
    },
    Bonus {
        title: "🥈 BÔNUS 2",
        subtitle: "Frases Prontas (Copia e Cola)",
        value: Price(6700),
        quote: "Copiar, colar e entregar",
        body: BonusBody::Bullets(&["Justificativa pedagógica", "Avaliação inicial", "Acompanhamento"]),
    },
    Bonus {
        title: "🥉 BÔNUS 3",
        subtitle: "Checklist de PEI Aprovado",
        value: Price(4700),
        quote: "Antes de entregar, confira isso",
        body: BonusBody::Bullets(&[
            "O que não pode faltar",
            "Erros mais comuns",
            "O que a coordenação observa",
        ]),
    },
    Bonus {
        title: "🏅 BÔNUS 4",
        subtitle: "+100 Atividades para Autismo",
        value: Price(5700),
        quote: "Aplicar sem precisar adaptar do zero",
        body: BonusBody::Line("Material pronto para aplicar no AEE e sala regular."),
    },
    Bonus {
        title: "🏅 BÔNUS 5",
        subtitle: "+240 relatórios descritivos prontos",
        value: Price(7700),
        quote: "Economize dias de trabalho na escrita dos relatórios",
        body: BonusBody::Line("Modelos prontos para preenchimento e entrega rápida."),
    },
    Bonus {
        title: "🎁 BÔNUS 6",
        subtitle: "Checklist de Acessibilidade Escolar",
        value: Price(4700),
        quote: "Garanta que sua escola seja inclusiva",
        body: BonusBody::Line("Um guia prático para avaliar a acessibilidade física e pedagógica."),
    },
    Bonus {
        title: "🎁 BÔNUS 7",
        subtitle: "Guia de Reunião com a Família",
        value: Price(5700),
        quote: "Tenha reuniões mais produtivas e acolhedoras",
        body: BonusBody::Line("Roteiro completo para conversar com os pais sobre o PEI."),
    },
    Bonus {
        title: "🎁 BÔNUS 8",
        subtitle: "Modelos de Relatório de AEE",
        value: Price(6700),
        quote: "Relatórios técnicos sem complicação",
        body: BonusBody::Line("Modelos prontos para o Atendimento Educacional Especializado."),
    },
    Bonus {
        title: "🎁 BÔNUS 9",
        subtitle: "Glossário da Legislação Educacional",
        value: Price(3700),
        quote: "Entenda os termos técnicos da lei",
        body: BonusBody::Line("Os principais termos e leis explicados de forma simples."),
    },
];

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Mariana Costa",
        role: "Professora de AEE — Ensino Fundamental",
        text: "Economizei semanas de trabalho. Os PEIs já vêm com os objetivos alinhados à BNCC e referenciados ao Decreto 12.773. Só precisei ajustar os dados do aluno e personalizar algumas estratégias.",
    },
    Testimonial {
        name: "Fernanda Rocha",
        role: "Coordenadora Pedagógica — Rede Municipal",
        text: "Como coordenadora, precisava de um material que já viesse na conformidade legal mais recente. Este material está atualizado com o Decreto 12.773/2025 — algo que a maioria dos outros materiais do mercado ainda não tem.",
    },
    Testimonial {
        name: "Ricardo Alves",
        role: "Especialista em Educação Especial — UFRJ",
        text: "O fato de ter PEIs específicos para cada condição E cada nível de ensino faz toda a diferença. O PEI para TEA no Ensino Médio é completamente diferente do da Educação Infantil — como deveria ser.",
    },
];

static OFFER_ITEMS: [OfferItem; 13] = [
    OfferItem { text: "150 PEIs, PDIs, PAEE e Estudo de Caso Editáveis", bold: true },
    OfferItem { text: "Totalmente editáveis no Word e Canva", bold: false },
    OfferItem { text: "Alinhados à BNCC com foco em educação regular e especial", bold: false },
    OfferItem { text: "BÔNUS 1: Banco de Objetivos Prontos", bold: true },
    OfferItem { text: "BÔNUS 2: Frases Prontas (Copia e Cola)", bold: true },
    OfferItem { text: "BÔNUS 3: Checklist de PEI Aprovado", bold: true },
    OfferItem { text: "BÔNUS 4: +100 Atividades para autismo", bold: true },
    OfferItem { text: "BÔNUS 5: +240 Relatórios Descritivos Prontos", bold: true },
    OfferItem { text: "BÔNUS 6: Checklist de Acessibilidade Escolar", bold: true },
    OfferItem { text: "BÔNUS 7: Guia de Reunião com a Família", bold: true },
    OfferItem { text: "BÔNUS 8: Modelos de Relatório de AEE", bold: true },
    OfferItem { text: "BÔNUS 9: Glossário da Legislação Educacional", bold: true },
    OfferItem { text: "Acesso Vitalício e atualizações mensais", bold: true },
];

static FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "Os PEIs são realmente editáveis?",
        answer: Answer::Text("Sim! Todos os 150 modelos são entregues em formato Word (.docx), permitindo que você altere qualquer informação e adapte para a sua realidade escolar."),
    },
    FaqEntry {
        question: "O material está atualizado com o Decreto 12.773/2025?",
        answer: Answer::Text("Sim, totalmente. Todo o conteúdo foi revisado e atualizado de acordo com as novas diretrizes do Decreto nº 12.773/2025."),
    },
    FaqEntry {
        question: "Posso usar esses PEIs para qualquer rede de ensino?",
        answer: Answer::Text("Sim. Os modelos foram desenvolvidos para serem aceitos tanto na rede pública quanto na rede privada em todo o Brasil."),
    },
    FaqEntry {
        question: "Como funciona o alinhamento à BNCC?",
        answer: Answer::Text("Os PEIs já trazem os campos de objetivos e habilidades alinhados aos códigos e competências da BNCC (Base Nacional Comum Curricular)."),
    },
    FaqEntry {
        question: "Recebo o arquivo imediatamente após a compra?",
        answer: Answer::List {
            intro: "Sim! Assim que o seu pagamento for aprovado, você recebe o acesso imediato ao material:",
            items: &["no seu e-mail", "via WhatsApp"],
        },
    },
];

pub static PEI_KIT: Offer = Offer {
    product_name: "Super Kit PEI Premium",
    banner: "🚀 LANÇAMENTO 2026 — Único material do mercado atualizado com o Decreto nº 12.773/2025 e alinhado à BNCC",
    headline: "150 PEIs prontos para usar",
    headline_highlight: "HOJE MESMO.",
    subtitle: "Planos Educacionais Individualizados completos, atualizados com o Decreto nº 12.773/2025 e totalmente alinhados à BNCC — para TEA, TDAH, Deficiência Intelectual e Deficiência Física/Motora.",
    mockup: "https://digitallfp.wordpress.com/wp-content/uploads/2026/02/mockup-1.png",
    hero_cta: "QUERO MEUS PEIS PRONTOS AGORA",
    tags: &TAGS,
    stats: &STATS,
    value_heading: "Se você monta PEI do zero, está pagando com o seu tempo.",
    value_props: &VALUE_PROPS,
    value_closing: &[
        "Por isso, eu reuni mais de 150 modelos de PEIs, PDIs e PAEE prontos para usar.",
        "São modelos pensados para você modelar, editar e entregar em poucos minutos, sem insegurança e sem retrabalho.",
    ],
    kit_badge: "O que você recebe ao adquirir o kit",
    kit_heading: "Tudo o que você precisa para montar PEIs sem sofrimento em 2026",
    kit_subtitle: "Não é só um modelo. É um kit completo para você nunca mais travar na hora de montar PEI, PDI ou PAEE.",
    kit_items: &KIT_ITEMS,
    kit_cta: "👉 Quero meu kit completo agora",
    samples_heading: "Amostra do Material",
    samples_note: "Material em Word e 100% editável.",
    samples: &SAMPLES,
    video: None,
    bonus_heading: "Você leva muito mais do que 150 PEIs",
    bonus_subtitle: "Junto com os 150 PEIs, você recebe materiais extras — prontos para usar, sem custo adicional.",
    bonuses: &BONUSES,
    proofs_heading: "Quem comprou, aprovou",
    proofs: None,
    testimonials_heading: "Aprovado por quem está na sala de aula",
    testimonials: &TESTIMONIALS,
    offer_heading: "O que você vai receber:",
    offer_items: &OFFER_ITEMS,
    old_price: Price(7990),
    price: Price(2990),
    payment_note: "PAGAMENTO ÚNICO NO PIX E NO CARTÃO",
    checkout_url: config::CHECKOUT_URL,
    checkout_label: "QUERO MEU KIT AGORA",
    guarantee_seal: "https://digitallfp.wordpress.com/wp-content/uploads/2025/09/selo-bloco-08.png",
    guarantee_days: 7,
    faq: &FAQ,
    copyright: "© 2026 • TODOS OS DIREITOS RESERVADOS",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_brazilian_format() {
        assert_eq!(Price(2990).to_string(), "R$ 29,90");
        assert_eq!(Price(9700).amount(), "97,00");
        assert_eq!(Price(5).amount(), "0,05");
        assert_eq!(Price(123_456).amount(), "1.234,56");
        assert_eq!(Price(100_000_000).amount(), "1.000.000,00");
    }

    #[test]
    fn launch_price_is_a_discount() {
        assert!(PEI_KIT.price < PEI_KIT.old_price);
    }

    #[test]
    fn every_bonus_is_listed_in_the_offer() {
        for (n, _) in PEI_KIT.bonuses.iter().enumerate() {
            let prefix = format!("BÔNUS {}:", n + 1);
            assert!(
                PEI_KIT.offer_items.iter().any(|item| item.text.starts_with(&prefix)),
                "missing {prefix}"
            );
        }
        assert_eq!(PEI_KIT.bonus_figure(), "09");
    }

    #[test]
    fn faq_has_five_distinct_questions() {
        assert_eq!(PEI_KIT.faq.len(), 5);
        for (i, a) in PEI_KIT.faq.iter().enumerate() {
            for b in &PEI_KIT.faq[i + 1..] {
                assert_ne!(a.question, b.question);
            }
        }
    }

    #[test]
    fn every_gallery_image_is_externally_hosted() {
        let galleries = std::iter::once(PEI_KIT.samples).chain(PEI_KIT.proofs);
        for gallery in galleries {
            for image in gallery.images() {
                assert!(image.starts_with("https://"), "{image} is not a hosted asset");
            }
        }
        assert!(PEI_KIT.mockup.starts_with("https://"));
        assert!(PEI_KIT.guarantee_seal.starts_with("https://"));
    }

    #[test]
    fn testimonial_initial() {
        assert_eq!(TESTIMONIALS[0].initial(), 'M');
    }

    #[test]
    fn checkout_points_at_configured_url() {
        assert_eq!(PEI_KIT.checkout_url, config::CHECKOUT_URL);
        assert!(PEI_KIT.checkout_url.starts_with("https://"));
    }
}

//! Static page copy and the qualification field list (pt-BR).

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::lead_form::{FieldDefinition, FieldKind};

pub const BRAND: &str = "Ad Funnel Labs";
pub const TAGLINE: &str = "Transformando anúncios em ativos.";

pub const HERO_TITLE: &str =
    "Pare de vender no escuro. Nós criamos o sistema que atrai clientes qualificados para você, todos os dias.";
pub const HERO_SUBTITLE: &str = "Para prestadores de serviço cansados da instabilidade. Construímos funis de venda automáticos que transformam anúncios em clientes, de forma previsível e lucrativa.";
pub const HERO_CTA: &str = "Quero um sistema de vendas";

pub const PROBLEM_TITLE: &str = "Sua prospecção parece uma aposta?";
pub const PROBLEM_INTRO: &str =
    "Se você se identifica com um destes cenários, não está sozinho. É o sinal de que falta um sistema.";

pub const SOLUTION_TITLE: &str = "A solução: um funil de vendas sob medida.";
pub const SOLUTION_BODY: &str = "Nós não vendemos 'posts' ou 'seguidores'. Nós construímos uma máquina de vendas para o seu negócio: um processo que atrai desconhecidos através de anúncios, qualifica-os automaticamente e agenda reuniões apenas com os leads mais preparados para comprar seu serviço de alto valor.";

pub const FORM_TITLE: &str = "Pronto para ter previsibilidade?";
pub const FORM_INTRO: &str = "Preencha o formulário e descubra se nosso sistema é a solução ideal para o seu momento. É rápido e sem compromisso.";
pub const FORM_SUBMIT: &str = "Verificar Qualificação";

pub const THANKS_TITLE: &str = "Obrigado!";
pub const THANKS_BODY: &str =
    "Recebemos suas informações. Em breve, nossa equipe entrará em contato para os próximos passos.";

/// Shown when a lead sink refuses an otherwise valid submission.
pub const SINK_FAILURE_ALERT: &str = "Não foi possível enviar suas informações agora. Tente novamente em instantes.";

/// One card in the "problem" section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PainPoint {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PAIN_POINTS: &[PainPoint] = &[
    PainPoint {
        title: "Clientes Desqualificados",
        body: "Você perde tempo em reuniões com pessoas que não podem pagar ou não entendem o valor do seu serviço.",
    },
    PainPoint {
        title: "Montanha-Russa de Faturamento",
        body: "Um mês bom, outro ruim. A falta de previsibilidade impede seu crescimento e gera estresse constante.",
    },
    PainPoint {
        title: "Dependência de Indicações",
        body: "Seu negócio está à mercê da sorte e do 'boca a boca', sem um motor de crescimento que você controla.",
    },
];

pub const REVENUE_OPTIONS: &[&str] = &[
    "Selecione uma opção",
    "Ainda não tenho faturamento",
    "Até R$ 5.000",
    "Entre R$ 5.000 e R$ 10.000",
    "Entre R$ 10.000 e R$ 20.000",
    "Acima de R$ 20.000",
];

/// Fields of the qualification form, in render order.
pub static QUALIFICATION_FIELDS: &[FieldDefinition] = &[
    FieldDefinition { name: "name", label: "Seu nome", kind: FieldKind::Text, required: true, default_value: None },
    FieldDefinition {
        name: "email",
        label: "Seu melhor e-mail",
        kind: FieldKind::Email,
        required: true,
        default_value: None,
    },
    FieldDefinition {
        name: "service",
        label: "Qual serviço você oferece?",
        kind: FieldKind::Text,
        required: true,
        default_value: None,
    },
    FieldDefinition {
        name: "revenue",
        label: "Qual seu faturamento médio mensal?",
        kind: FieldKind::Select { options: REVENUE_OPTIONS },
        required: true,
        default_value: Some("Selecione uma opção"),
    },
];

//! Texts shown to the respondent.

use csat::{Step, TaxIdKind};

pub const INTRO_TITLE: &str = "Pesquisa de Satisfação";
pub const INTRO_TEXT: &str = "Olá! Sua parceria é o que nos move. Dedique alguns segundos para \
compartilhar sua experiência e nos ajude a entregar sempre o melhor para o seu negócio.";
pub const START: &str = "Avaliar";
pub const QUIT: &str = "Sair";

pub const FINAL_TITLE: &str = "Muito Obrigado!";
pub const FINAL_TEXT: &str = "Recebemos sua avaliação. Agradecemos por fazer parte da nossa \
história e por nos ajudar a evoluir sempre!";
pub const RESTART: &str = "Nova pesquisa?";

/// Shown on the last question, whose answer submits the survey.
pub const FINISH_HINT: &str = "Enter para finalizar";
pub const BACK: &str = "← Voltar";
pub const OTHER: &str = "Outro...";
pub const OTHER_PROMPT: &str = "Outro (máx 20)";
/// Typed alone in a text prompt, returns to the previous step.
pub const BACK_INPUT: &str = "<";

/// The question asked at `step`.
pub fn question(step: Step) -> Option<&'static str> {
    let text = match step {
        Step::TaxId => "Por favor, para iniciar, insira o CPF ou CNPJ da sua empresa:",
        Step::Name => "Agora, informe seu nome:",
        Step::Phone => "Para completar, informe o número de telefone cadastrado em seu WhatsApp:",
        Step::ServiceScore => {
            "Em uma escala de 1 a 10, sendo 1 muito insatisfeito e 10 muito satisfeito, \
             qual nota você atribuiria ao nosso atendimento ao cliente?"
        }
        Step::WaitScore => {
            "Em uma escala de 1 a 10, sendo 1 muito insatisfeito e 10 muito satisfeito, \
             qual nota você atribui ao tempo de espera?"
        }
        Step::RecommendScore => {
            "Em uma escala de 1 a 10, sendo 1 muito insatisfeito e 10 muito satisfeito, \
             quanto você recomendaria a MAKE Distribuidora para um amigo ou revenda parceira?"
        }
        Step::BestThing => {
            "Em uma palavra, qual foi a melhor coisa de ter optado pela MAKE Distribuidora! (Ex. Qualidade)"
        }
        Step::WorstThing => {
            "Em uma palavra, qual foi a pior coisa de ter optado pela MAKE Distribuidora?"
        }
        Step::Suggestion => {
            "Em suas palavras, como você acha que devemos melhorar para atender melhor suas necessidades?"
        }
        Step::Intro | Step::Final => return None,
    };
    Some(text)
}

/// Name of the document a tax id was recognized as.
pub fn document_label(kind: TaxIdKind) -> &'static str {
    match kind {
        TaxIdKind::Cpf => "CPF",
        TaxIdKind::Cnpj => "CNPJ",
    }
}

/// Input hint shown under a question.
pub fn hint(step: Step) -> Option<&'static str> {
    match step {
        Step::TaxId => Some("Digite apenas números."),
        Step::Name => Some("Apenas letras, mín. 3 caracteres."),
        Step::Phone => Some("DDD + 9 + Número"),
        _ => None,
    }
}

//! Keyword-based intent routing over the curated club answers.
//!
//! Rules are evaluated in a fixed order against the lowercased input; the
//! first rule with a keyword contained in the input wins.

pub mod answers;

use crate::models::{Intent, QuickQuery, Welcome};

/// A curated answer selected for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqAnswer {
    pub intent: Intent,
    pub text: &'static str,
}

/// What a matching rule produces.
enum Target {
    Fixed(Intent, &'static str),
    Schedule,
}

struct Rule {
    keywords: &'static [&'static str],
    target: Target,
}

const CHILDREN_KEYWORDS: &[&str] = &["niño", "niña", "menor", "infantil"];
const ADULT_KEYWORDS: &[&str] = &["adulto", "mayor"];

const RULES: &[Rule] = &[
    Rule {
        keywords: &[
            "inscripcion",
            "inscripción",
            "inscribirme",
            "matricula",
            "matrícula",
            "registro",
            "pasos",
            "como me inscribo",
            "cómo me inscribo",
        ],
        target: Target::Fixed(Intent::Enrollment, answers::ENROLLMENT_STEP_1),
    },
    Rule {
        keywords: &[
            "congelar",
            "congelación",
            "congelacion",
            "congelamiento",
            "pausar mi ciclo",
            "suspender",
        ],
        target: Target::Fixed(Intent::CycleFreeze, answers::CYCLE_FREEZE),
    },
    Rule {
        keywords: &[
            "consentimiento",
            "autorizo",
            "autorización",
            "autorizacion",
            "datos personales",
            "uso de imagen",
            "fotos",
            "videos",
        ],
        target: Target::Fixed(Intent::Consent, answers::CONSENT),
    },
    Rule {
        keywords: &["horario", "hora", "cuando", "tiempo"],
        target: Target::Schedule,
    },
    Rule {
        keywords: &["precio", "costo", "valor", "cuanto", "pago"],
        target: Target::Fixed(Intent::Prices, answers::PRICES),
    },
    Rule {
        keywords: &["traer", "necesito", "llevar", "primera clase", "equipamiento"],
        target: Target::Fixed(Intent::FirstClass, answers::FIRST_CLASS),
    },
    Rule {
        keywords: &[
            "enfasis",
            "énfasis",
            "enfoque",
            "que enseñan",
            "metodologia",
            "metodología",
            "escuela",
            "enseñanza",
            "sistema",
            "niveles",
            "como enseñan",
            "que aprendo",
            "qué aprendo",
        ],
        target: Target::Fixed(Intent::Methodology, answers::METHODOLOGY),
    },
    Rule {
        keywords: &["edad", "años", "niño", "menor"],
        target: Target::Fixed(Intent::Ages, answers::AGES),
    },
    Rule {
        keywords: &[
            "contacto",
            "teléfono",
            "telefono",
            "whatsapp",
            "direccion",
            "dirección",
            "ubicacion",
            "ubicación",
            "donde",
        ],
        target: Target::Fixed(Intent::Contact, answers::CONTACT),
    },
    Rule {
        keywords: &[
            "reposicion",
            "reposición",
            "reponer",
            "recuperar clase",
            "faltar",
        ],
        target: Target::Fixed(Intent::MakeupPolicy, answers::MAKEUP_POLICY),
    },
    Rule {
        keywords: &[
            "reglamento",
            "reglas",
            "normas",
            "politicas",
            "políticas",
            "terminos",
            "términos",
            "condiciones",
        ],
        target: Target::Fixed(Intent::Regulations, answers::REGULATIONS),
    },
    // Shadowed by the enrollment rule; kept so the intent stays addressable.
    Rule {
        keywords: &[
            "inscripcion",
            "inscripción",
            "matricula",
            "matrícula",
            "registro",
        ],
        target: Target::Fixed(Intent::Registration, answers::REGISTRATION),
    },
];

const QUICK_QUERIES: &[QuickQuery] = &[
    QuickQuery {
        id: "schedules",
        label: "📅 Horarios del club",
        prompt: "¿Cuáles son los horarios de funcionamiento?",
    },
    QuickQuery {
        id: "schedules_children",
        label: "📅 Horarios del club para niños",
        prompt: "¿Cuáles son los horarios de niños?",
    },
    QuickQuery {
        id: "schedules_adults",
        label: "📅 Horarios del club para adultos",
        prompt: "¿Cuáles son los horarios de adultos?",
    },
    QuickQuery {
        id: "prices",
        label: "💰 Precios por frecuencia semanal",
        prompt: "¿Cuáles son los precios del mes por frecuencia semanal?",
    },
    QuickQuery {
        id: "methodology",
        label: "🎯 Énfasis de nuestra Escuela de Natación",
        prompt: "¿Cuál es el énfasis de la Escuela de Natación MNM?",
    },
    QuickQuery {
        id: "enrollment",
        label: "📝 Pasos para inscripción",
        prompt: "¿Cómo me inscribo?",
    },
    QuickQuery {
        id: "first_class",
        label: "🏊‍♂️ ¿Qué traer en la primera clase?",
        prompt: "¿Qué debo traer a mi primera clase de natación?",
    },
    QuickQuery {
        id: "makeup_policy",
        label: "📋 Política de reposición de clases",
        prompt: "política de reposición",
    },
    QuickQuery {
        id: "ages",
        label: "👶 Edades aceptadas",
        prompt: "¿Desde qué edad aceptan niños?",
    },
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Select the curated answer for a user input, if any rule matches.
pub fn route(input: &str) -> Option<FaqAnswer> {
    let lowered = input.to_lowercase();

    let rule = RULES
        .iter()
        .find(|rule| contains_any(&lowered, rule.keywords))?;

    let answer = match rule.target {
        Target::Fixed(intent, text) => FaqAnswer { intent, text },
        Target::Schedule => {
            if contains_any(&lowered, CHILDREN_KEYWORDS) {
                FaqAnswer {
                    intent: Intent::ScheduleChildren,
                    text: answers::SCHEDULE_CHILDREN,
                }
            } else if contains_any(&lowered, ADULT_KEYWORDS) {
                FaqAnswer {
                    intent: Intent::ScheduleAdults,
                    text: answers::SCHEDULE_ADULTS,
                }
            } else {
                FaqAnswer {
                    intent: Intent::ScheduleGeneral,
                    text: answers::SCHEDULE_GENERAL,
                }
            }
        }
    };

    tracing::debug!(intent = answer.intent.as_str(), "FAQ rule matched");
    Some(answer)
}

/// Text of a step in the guided enrollment flow.
pub fn enrollment_step(step: u32) -> Option<&'static str> {
    match step {
        1 => Some(answers::ENROLLMENT_STEP_1),
        _ => None,
    }
}

/// The predefined suggestions shown next to the chat input.
pub fn quick_queries() -> Vec<QuickQuery> {
    QUICK_QUERIES.to_vec()
}

/// Greeting payload for a new chat session.
pub fn welcome() -> Welcome {
    Welcome {
        assistant_name: answers::ASSISTANT_NAME,
        club_name: answers::CLUB_NAME,
        greeting: answers::WELCOME,
        whatsapp: answers::WHATSAPP,
        email: answers::EMAIL,
        location: answers::LOCATION,
        quick_queries: quick_queries(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_of(input: &str) -> Option<Intent> {
        route(input).map(|a| a.intent)
    }

    #[test]
    fn test_enrollment_wins_over_later_rules() {
        assert_eq!(intent_of("¿Cómo me inscribo?"), Some(Intent::Enrollment));
        assert_eq!(
            intent_of("¿Cuánto cuesta la matrícula?"),
            Some(Intent::Enrollment)
        );
        // The registration rule is never reached through routing.
        assert_eq!(intent_of("registro"), Some(Intent::Enrollment));
    }

    #[test]
    fn test_schedule_audiences() {
        assert_eq!(
            intent_of("¿Cuáles son los horarios de niños?"),
            Some(Intent::ScheduleChildren)
        );
        assert_eq!(
            intent_of("¿Cuáles son los horarios de adultos?"),
            Some(Intent::ScheduleAdults)
        );
        assert_eq!(
            intent_of("¿Cuáles son los horarios de funcionamiento?"),
            Some(Intent::ScheduleGeneral)
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(intent_of("PRECIOS"), Some(Intent::Prices));
        assert_eq!(intent_of("Política de Reposición"), Some(Intent::MakeupPolicy));
    }

    #[test]
    fn test_substring_matching_quirks() {
        // "ahora" contains "hora", so schedules come first.
        assert_eq!(intent_of("y ahora qué"), Some(Intent::ScheduleGeneral));
        // Ages need no schedule keyword.
        assert_eq!(
            intent_of("¿Desde qué edad aceptan niños?"),
            Some(Intent::Ages)
        );
    }

    #[test]
    fn test_quick_queries_route_to_expected_intents() {
        let expected = [
            Intent::ScheduleGeneral,
            Intent::ScheduleChildren,
            Intent::ScheduleAdults,
            Intent::Prices,
            Intent::Methodology,
            Intent::Enrollment,
            Intent::FirstClass,
            Intent::MakeupPolicy,
            Intent::Ages,
        ];
        let queries = quick_queries();
        assert_eq!(queries.len(), expected.len());
        for (query, intent) in queries.iter().zip(expected) {
            assert_eq!(intent_of(query.prompt), Some(intent), "{}", query.prompt);
        }
    }

    #[test]
    fn test_freeze_and_consent() {
        assert_eq!(
            intent_of("quiero congelar mi mensualidad"),
            Some(Intent::CycleFreeze)
        );
        assert_eq!(
            intent_of("¿firmo un consentimiento?"),
            Some(Intent::Consent)
        );
        assert_eq!(intent_of("¿toman fotos en clase?"), Some(Intent::Consent));
    }

    #[test]
    fn test_unmatched_input() {
        assert_eq!(intent_of("hola"), None);
        assert_eq!(intent_of(""), None);
    }

    #[test]
    fn test_enrollment_steps() {
        let step = enrollment_step(1).unwrap();
        assert!(step.contains("PASOS PARA INSCRIBIRTE"));
        assert!(enrollment_step(2).is_none());
        assert!(enrollment_step(0).is_none());
    }

    #[test]
    fn test_enrollment_step_text_layout() {
        let step = enrollment_step(1).unwrap();
        assert!(step.contains("primeros 5 dias del ciclo\n\n\n📆"));
        assert!(!step.contains("¡REALIZA TU INSCRIPCIÓN YA!"));
        assert!(step.ends_with(
            "📧 **Email:** monteriamaster@gmail.com\n👆 [Haz clic aquí para inscribirte por WhatsApp](https://wa.me/573144809367?text=Hola,%20quiero%20inscribirme%20en%20el%20Club%20de%20Natación%20MNM)\n💌 [Enviar correo electrónico](mailto:monteriamaster@gmail.com?subject=Inscripción%20Club%20de%20Natación%20MNM)"
        ));
    }

    #[test]
    fn test_documents_header_leaves_blank_line() {
        assert!(answers::DOCUMENTS_HEADER.ends_with(":**\n\n"));
    }

    #[test]
    fn test_answers_carry_contact_details() {
        for intent_input in ["precio", "traer", "edad", "reponer"] {
            let answer = route(intent_input).unwrap();
            assert!(answer.text.contains(answers::WHATSAPP));
        }
    }
}

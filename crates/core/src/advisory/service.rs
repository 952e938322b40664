//! Simulated advisor replies and generated texts.
//!
//! Every string here is canned; there is no model and no network call.
//! The artificial response delay is applied by the API layer, not here.

use chrono::Utc;

use super::types::{ChatMessage, ExecutiveReport};
use crate::school::ExpenseCategory;

const GREETING: &str =
    "Hola. Soy tu Asesor Virtual SISRC. ¿Tienes dudas sobre la imputación de gastos SEP o PIE?";

const TEASER_HINT: &str = "¿Tu ejecución SEP está baja (40%). Revisa facturas pendientes.";

const TRANSPORT_REPLY: &str = "Según la circular 30, los gastos de transporte deben estar \
     asociados directamente a actividades pedagógicas. (Respuesta generada por IA - Depende \
     de factibilidad técnica futura)";

const PAYROLL_REPLY: &str = "Los gastos en personal han sido precargados desde la Dirección \
     del Trabajo (LRE). Si detectas inconsistencias, debes rectificar primero en el portal \
     de la DT.";

const FALLBACK_REPLY: &str = "Puedo ayudarte a revisar la normativa vigente.";

const REPORT_SUMMARY: &str = "El cierre de Noviembre muestra un avance acelerado del 75%, \
     impulsado por la Región Metropolitana. Se observa una baja ejecución en los fondos FAEP \
     (60%) respecto al universo transferido, lo que podría generar saldos pendientes.";

const REPORT_ALERTS: [&str; 2] = [
    "Baja ejecución FAEP en Macrozona Norte",
    "Incremento inusual en item 'Servicios' en región BioBío",
];

const REPORT_RECOMMENDATION: &str =
    "Enviar alerta preventiva a sostenedores con saldos FAEP superiores al 40%.";

/// Simulated advisory content generator.
pub struct AdvisoryService;

impl AdvisoryService {
    /// Opening message of the advisor chat.
    #[must_use]
    pub fn greeting() -> ChatMessage {
        ChatMessage::assistant(GREETING)
    }

    /// Hint shown while the chat widget is collapsed.
    #[must_use]
    pub fn teaser_hint() -> &'static str {
        TEASER_HINT
    }

    /// Keyword-matched reply to a holder question.
    ///
    /// Transport and payroll questions get topical answers; anything
    /// else gets the generic fallback.
    #[must_use]
    pub fn chat_reply(question: &str) -> ChatMessage {
        let question = question.to_lowercase();
        let content = if question.contains("transporte") || question.contains("bus") {
            TRANSPORT_REPLY
        } else if question.contains("sueldo") || question.contains("honorario") {
            PAYROLL_REPLY
        } else {
            FALLBACK_REPLY
        };
        ChatMessage::assistant(content)
    }

    /// Canned executive summary, stamped with the generation time.
    #[must_use]
    pub fn executive_report() -> ExecutiveReport {
        ExecutiveReport {
            generated_at: Utc::now(),
            summary: REPORT_SUMMARY.to_string(),
            alerts: REPORT_ALERTS.iter().map(ToString::to_string).collect(),
            recommendation: REPORT_RECOMMENDATION.to_string(),
        }
    }

    /// Justification text for an expense, templated over its category.
    #[must_use]
    pub fn justification_text(category: ExpenseCategory) -> String {
        format!(
            "Gasto imputado al item {category} conforme al PME 2025. Cumple con requisitos \
             de pertinencia educativa según Circular 30. (Texto generado automáticamente por IA)"
        )
    }
}

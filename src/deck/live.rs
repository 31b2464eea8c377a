//! Live-polling wire contract
//!
//!     The generated deck talks to a small relay service that fans votes out between the
//!     presenter page and voters' phones. The core does not open connections; it only
//!     embeds what the browser-side script needs to speak this protocol.
//!
//!     | Event              | Direction          | Payload                          |
//!     |--------------------|--------------------|----------------------------------|
//!     | join-session       | client → relay     | session id                       |
//!     | mobile-ip          | relay → client     | URL voters browse to             |
//!     | register-quiz      | presenter → relay  | {session, question, options}     |
//!     | vote               | voter → relay      | {session, choice}                |
//!     | qcm-results-update | relay → room       | {choice}                         |
//!
//!     Tallies are additive per option: every `qcm-results-update` increments one counter.
//!     Repeat votes are not deduplicated and counts are never reconciled against a canonical
//!     state; arrival order is the only order.

use super::ast::LiveQuizBox;
use serde::{Deserialize, Serialize};

pub const JOIN_SESSION: &str = "join-session";
pub const MOBILE_IP: &str = "mobile-ip";
pub const REGISTER_QUIZ: &str = "register-quiz";
pub const VOTE: &str = "vote";
pub const RESULTS_UPDATE: &str = "qcm-results-update";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterQuiz {
    pub session: String,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&LiveQuizBox> for RegisterQuiz {
    fn from(quiz: &LiveQuizBox) -> Self {
        Self {
            session: quiz.session.clone(),
            question: quiz.question.clone(),
            options: quiz.options.iter().map(|o| o.label.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub session: String,
    pub choice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsUpdate {
    pub choice: String,
}

/// Names of the protocol events, exposed to the runtime script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventNames {
    pub join_session: &'static str,
    pub mobile_ip: &'static str,
    pub register_quiz: &'static str,
    pub vote: &'static str,
    pub results_update: &'static str,
}

impl Default for EventNames {
    fn default() -> Self {
        Self {
            join_session: JOIN_SESSION,
            mobile_ip: MOBILE_IP,
            register_quiz: REGISTER_QUIZ,
            vote: VOTE,
            results_update: RESULTS_UPDATE,
        }
    }
}

use serde::Serialize;

use super::controller::{FormCopy, FormFields, FormKind};

/// Only the testimony itself is sent, never anything identifying.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WhistleblowFields {
    pub message: String,
}

impl FormFields for WhistleblowFields {
    const KIND: FormKind = FormKind::Whistleblow;
    const COPY: FormCopy = FormCopy {
        consent_required: "Merci d'accepter le traitement anonyme de votre témoignage avant l'envoi.",
        success_title: "Témoignage envoyé",
        success_description: "Votre témoignage a été envoyé de manière anonyme et sécurisée.",
        success_status: "Merci pour votre courage. Votre témoignage a bien été reçu.",
        failure_title: "Envoi impossible",
        failure_description: "Le canal sécurisé est momentanément indisponible. Vous pouvez nous transmettre votre témoignage à",
        failure_status: "Votre témoignage n'a pas pu être envoyé. Il est conservé ci-dessus pour un nouvel essai.",
    };
}

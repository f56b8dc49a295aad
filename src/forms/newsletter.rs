use serde::Serialize;

use super::controller::{FormCopy, FormFields, FormKind};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewsletterFields {
    pub email: String,
}

impl FormFields for NewsletterFields {
    const KIND: FormKind = FormKind::Newsletter;
    const COPY: FormCopy = FormCopy {
        consent_required: "Merci de confirmer votre consentement RGPD avant de continuer.",
        success_title: "Inscription confirmée",
        success_description: "Merci de rejoindre la vigie citoyenne. Vérifiez votre boîte mail pour confirmer votre adresse.",
        success_status: "Inscription enregistrée.",
        failure_title: "Service indisponible",
        failure_description: "La newsletter est en cours de déploiement sécurisé. Contactez-nous pour être ajouté manuellement :",
        failure_status: "La newsletter est actuellement en bêta privée. Nous vous recontacterons très vite.",
    };
}

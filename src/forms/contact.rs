use serde::Serialize;

use super::controller::{FormCopy, FormFields, FormKind};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields for ContactFields {
    const KIND: FormKind = FormKind::Contact;
    const COPY: FormCopy = FormCopy {
        consent_required: "Merci de confirmer votre consentement RGPD avant d'envoyer votre message.",
        success_title: "Message envoyé",
        success_description: "Nous vous répondrons dès que possible.",
        success_status: "Votre message a bien été transmis.",
        failure_title: "Envoi impossible",
        failure_description: "Le formulaire est momentanément indisponible. Écrivez-nous directement à",
        failure_status: "Votre message n'a pas pu être envoyé. Il est conservé ci-dessus : réessayez ou copiez-le dans un email.",
    };
}

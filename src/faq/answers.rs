//! Curated answer texts (Markdown, Spanish).

pub const CLUB_NAME: &str = "Club de Natación Montería Natación Master";
pub const ASSISTANT_NAME: &str = "NatalIA";
pub const WHATSAPP: &str = "+57 3144809367";
pub const EMAIL: &str = "monteriamaster@gmail.com";
pub const LOCATION: &str = "Piscina de la Villaolímpica, Montería";

macro_rules! contact_lines {
    () => {
        "📞 **WhatsApp:** +57 3144809367\n📧 **Email:** monteriamaster@gmail.com"
    };
}

macro_rules! whatsapp_link {
    () => {
        "👆 [Haz clic aquí para inscribirte por WhatsApp](https://wa.me/573144809367?text=Hola,%20quiero%20inscribirme%20en%20el%20Club%20de%20Natación%20MNM)"
    };
}

macro_rules! enroll_footer {
    () => {
        concat!(
            "\n\n",
            contact_lines!(),
            "\n\n🔥 **¡REALIZA TU INSCRIPCIÓN YA!**\n",
            whatsapp_link!(),
            "\n💌 [Enviar correo electrónico](mailto:monteriamaster@gmail.com?subject=Inscripción%20Club%20de%20Natación%20MNM)"
        )
    };
}

macro_rules! enrollment_links {
    () => {
        concat!(
            "\n\n",
            contact_lines!(),
            "\n",
            whatsapp_link!(),
            "\n💌 [Enviar correo electrónico](mailto:monteriamaster@gmail.com?subject=Inscripción%20Club%20de%20Natación%20MNM)"
        )
    };
}

macro_rules! inquiry_footer {
    () => {
        concat!(
            "🔥 **¡REALIZA TU INSCRIPCIÓN YA!**\n",
            whatsapp_link!(),
            "\n💌 [Enviar correo electrónico](mailto:monteriamaster@gmail.com?subject=Consulta%20Club%20de%20Natación%20MNM)"
        )
    };
}

pub const WELCOME: &str = "¡Hola! Bienvenido al Club Montería Natación Master. \
Soy tu asistente virtual **NatalIA** y te enseñaré todo sobre nuestro club y el proceso de inscripción. \
Estamos en Villaolímpica - Montería. \
**¿Listo para sumergirte en tu proceso de aprendizaje o entrenamiento?** 🏊‍♀️";

pub const ENROLLMENT_STEP_1: &str = concat!(
    "✅ **PERFECTO, ESTOS SON LOS PASOS PARA INSCRIBIRTE:**

1️⃣ **Actividad:** Ofrecemos clases de natación en la piscina olímpica de la Villa Olímpica de Montería.
Es un deporte de bajo impacto, ideal para la salud.

2️⃣ **Requisitos:**
• Aceptar términos y condiciones
• Firmar consentimiento informado
• Presentar certificado médico, si es necesario

3️⃣ **Matrícula:**
• Tiene vigencia de 1 año
• Solo se paga una vez al año
• Importante: No se devuelve el valor pagado

4️⃣ **Mensualidad:**
• Se paga por adelantado cada mes
• Solo puedes asistir si estás al día en el pago
• Tarifa pronto pago los primeros 5 dias del ciclo


📆 **¿Cómo es la política de devoluciones?**
🟡 Antes de la primera clase: 100%
🟠 Después de la segunda clase: 50%
🔴 Después de la tercera clase: No hay devolución

5️⃣ **Importante sobre el uso de la piscina**
La piscina es pública. El aporte mensual garantiza instructores calificados, no es el alquiler del espacio.

6️⃣ **¿Qué riesgos debo tener en cuenta?**
• Lesiones menores, ahogamiento, contacto con otros usuarios, clima
• Declaras estar en condiciones óptimas de salud
• Si representas a un menor, también asumes responsabilidad por él/ella

7️⃣ **¿Se toman fotos o videos?**
Sí. Autorizas su uso con fines deportivos y promocionales del club al aceptar los términos.

8️⃣ **¿Deseas continuar con tu inscripción?**

✅ **Sí, quiero inscribirme**
❌ **No, volver al inicio**
📩 **Contactar asesor humano para solicitar la documentación**

9️⃣ **¿Tienes dudas sobre nuestra política de reposición de clases?**
📋 Pregúntame específicamente sobre \"política de reposición\" o \"reponer clases\" para obtener información detallada.",
    enrollment_links!()
);

pub const CYCLE_FREEZE: &str = concat!(
    "❄️ **CONGELACIÓN DE CICLO:**

Si necesitas pausar temporalmente tu mensualidad (viaje, incapacidad médica u otra causa justificada), \
puedes solicitar la congelación de tu ciclo.

📋 Para gestionarla:
• Escríbenos por el WhatsApp oficial del club **antes** de iniciar el periodo que deseas congelar
• Indica el motivo y, si aplica, adjunta el soporte (por ejemplo, incapacidad médica)
• El club te confirmará las fechas en que se reanuda tu ciclo

⚠️ Las clases no asistidas sin solicitud previa no se congelan ni se reponen.",
    enroll_footer!()
);

pub const CONSENT: &str = concat!(
    "📝 **CONSENTIMIENTO INFORMADO Y TÉRMINOS:**

Para inscribirte debes:
• Aceptar los términos y condiciones del club
• Firmar el consentimiento informado
• Presentar certificado médico, si es necesario

⚠️ **Riesgos que aceptas:** lesiones menores, ahogamiento, contacto con otros usuarios y condiciones del clima. \
Declaras estar en condiciones óptimas de salud.

👨‍👩‍👧 Si representas a un menor, también asumes responsabilidad por él/ella.

📸 **Fotos y videos:** al aceptar los términos autorizas su uso con fines deportivos y promocionales del club.",
    enroll_footer!()
);

pub const SCHEDULE_CHILDREN: &str = concat!(
    "🏊‍♀️ **HORARIOS PARA NIÑOS:**

**Martes y Jueves:**
• 4:00 PM a 5:00 PM
• 5:00 PM a 6:00 PM

**Sábados:**
• 8:00 AM a 9:00 AM
• 4:00 PM a 5:00 PM
• 5:00 PM a 6:00 PM

**Miércoles y Viernes:**
• 4:00 PM a 5:00 PM
• 5:00 PM a 6:00 PM",
    enroll_footer!()
);

pub const SCHEDULE_ADULTS: &str = concat!(
    "🏊‍♂️ **HORARIOS PARA ADULTOS:**

**Martes y Jueves:**
• 5:00 AM a 6:00 AM
• 6:00 AM a 7:00 AM
• 7:00 AM a 8:00 AM
• 6:00 PM a 7:00 PM
• 7:00 PM a 8:00 PM

**Sábados:**
• 5:00 AM a 6:00 AM
• 6:00 AM a 7:00 AM
• 7:00 AM a 8:00 AM

**Miércoles y Viernes:**
• 6:00 PM a 7:00 PM",
    enroll_footer!()
);

pub const SCHEDULE_GENERAL: &str = concat!(
    "📅 **HORARIOS COMPLETOS - CLUB DE NATACIÓN MNM:**

**MARTES Y JUEVES:**
• 5:00-8:00 AM (adultos)
• 4:00-6:00 PM (niños)
• 6:00-8:00 PM (adultos)

**SÁBADOS:**
• 5:00-8:00 AM (adultos)
• 8:00 AM-6:00 PM (niños y adultos)

**MIÉRCOLES Y VIERNES:**
• 4:00-6:00 PM (niños)
• 6:00-7:00 PM (adultos)

📍 Ubicación: Piscina de la Villaolímpica, Montería
📞 WhatsApp: +57 3144809367

🔥 **¡REALIZA TU INSCRIPCIÓN YA!**
",
    whatsapp_link!()
);

pub const PRICES: &str = concat!(
    "💰 **PRECIOS CLUB DE NATACIÓN MNM:**

🏊‍♀️ **MENSUALIDADES:**
1. 1️⃣  vez por semana: $120,000
2. 2️⃣  veces por semana: $160,000
3. 3️⃣  veces por semana: $180,000

💡 **Tarifa con descuento pronto pago:** Los primeros 5 días del ciclo

📝 **Inscripción:** $40,000 (pago único)",
    enroll_footer!()
);

pub const FIRST_CLASS: &str = concat!(
    "🎒 **QUÉ TRAER A TU PRIMERA CLASE:**

✅ **Obligatorio:**
• Traje de baño deportivo
• Gorro de natación
• Gafas de natación
• Toalla

✅ **Opcional:**
• Chanclas antideslizantes

👶 **Edades:** Desde 5 años sin límite superior",
    enroll_footer!()
);

pub const METHODOLOGY: &str = concat!(
    "🎯 **ÉNFASIS DE NUESTRA ESCUELA:**

1. 🏊‍♀️ Desarrollo de habilidades acuáticas
2. 🏊‍♂️ Enseñanza de técnicas en los 4 estilos de natación
3. 📊 Sistema de evaluación progresivo por niveles (nivel basico, intermedio, avanzado y equipo)
4. 🏆 Programa de reconocimiento del Nadador del trimestre
5. 📈 Evaluación mensual del avance del nivel con puntaje que es enviado al grupo de Practicantes del Club
6. 💪 Entrenamiento para resistencia y velocidad
7. 👥 Natación para todas las edades
8. 🥇 Preparación para competencias
9. ⚡ Fomento de disciplina y trabajo en equipo
10. 🌱 Promoción de estilo de vida saludable",
    enroll_footer!()
);

pub const AGES: &str = concat!(
    "👶 **EDADES ACEPTADAS:**

✅ Desde 5 años sin límite superior

🏊‍♀️ Tenemos horarios especializados para niños y adultos, en grupos segmentados para facilitar y promover el aprendizaje",
    enroll_footer!()
);

pub const CONTACT: &str = "📍 **INFORMACIÓN DE CONTACTO:**

🏊‍♀️ **Club de Natación Montería Natación Master**
📍 Dirección: Piscina de la Villaolímpica, Montería
📞 Teléfono: +57 3144809367
💬 WhatsApp: +57 3144809367
📧 Email: monteriamaster@gmail.com

¡Te esperamos! 🌊";

pub const MAKEUP_POLICY: &str = concat!(
    "📋 **POLÍTICA DE REPOSICIÓN - MONTERÍA NATACIÓN MASTER**

✅ Entendemos que a veces surgen imprevistos. Por eso, puedes reponer una (1) clase por mes, y evaluamos cada caso según la justificación que nos compartas.

📅 Puedes tomar tu reposición en otro horario dentro del mismo mes, en grupos del mismo nivel y calendario, según disponibilidad de cupo. Si faltaste en la última semana del ciclo, ¡tranqui! tienes hasta 8 días del mes siguiente para recuperarla.

🔁 Ten en cuenta que las reposiciones no se acumulan ni se trasladan a otros meses.

🌧 Si la piscina se cierra por motivos externos, garantizamos las reposiciones que correspondan.

❌ Para cuidar la organización de nuestros grupos y ofrecerte una buena experiencia, no reponemos clases sin aviso previo.

📲 Escríbenos por WhatsApp oficial del club para gestionar tu reposición. ¡Estamos para ayudarte! 🏊‍♀️✨

📎 **Documento completo:** https://bit.ly/32J20r0",
    enroll_footer!()
);

pub const REGULATIONS: &str = "📋 **INFORMACIÓN SOBRE REGLAMENTOS:**

Para información detallada sobre:
• Reglamentos del club
• Políticas de reposición
• Términos y condiciones
• Normas de convivencia

📞 Por favor contacta directamente al club:
WhatsApp: +57 3144809367

Tenemos documentación completa disponible.";

pub const REGISTRATION: &str = "📝 **PROCESO DE INSCRIPCIÓN:**

💰 **Costo de inscripción:** $40,000 (pago único)

📋 Para completar tu inscripción necesitas:
• Documentación personal
• Información médica básica
• Selección de horarios

📞 Para iniciar el proceso contactanos:
WhatsApp: +57 3144809367

¡Te ayudaremos con todo el proceso, Bienvenido! 🏊‍♀️";

/// Header placed above text retrieved from club documents.
pub const DOCUMENTS_HEADER: &str = "📋 **Información encontrada en documentos del club:**\n\n";

pub const DOCUMENTS_FOOTER: &str = concat!("\n\n", contact_lines!(), "\n", inquiry_footer!());

pub const GENERIC: &str = concat!(
    "🏊‍♀️ **Club de Natación Montería Natación Master**

Lo siento, no tengo información específica sobre tu consulta en este momento.

📞 Para información detallada contacta directamente:
💬 WhatsApp: +57 3144809367
📧 Email: monteriamaster@gmail.com
📍 Piscina de la Villaolímpica, Montería

",
    inquiry_footer!(),
    "\n\n¡Estaremos felices de ayudarte! 🌊"
);

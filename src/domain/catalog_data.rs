use crate::domain::model::{Category, Service, ServiceMedia, ServiceStatus, SuperCategory};

struct ServiceDef {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    benefits: &'static [&'static str],
    delivery_time: &'static str,
    category: Category,
    super_category: SuperCategory,
    priority: i32,
    featured: bool,
    status: ServiceStatus,
    tags: &'static [&'static str],
    color: &'static str,
    gradient: &'static str,
    video: Option<&'static str>,
}

impl ServiceDef {
    fn build(self) -> Service {
        let media = self.video.map(|video| ServiceMedia {
            video: Some(video.to_string()),
            gallery: vec![format!("/images/services/{}-1.webp", self.id)],
        });

        Service {
            id: self.id.to_string(),
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            description: self.description.to_string(),
            benefits: self.benefits.iter().map(|b| b.to_string()).collect(),
            delivery_time: self.delivery_time.to_string(),
            category: self.category,
            super_category: self.super_category,
            priority: self.priority,
            featured: self.featured,
            status: self.status,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            color: self.color.to_string(),
            gradient: self.gradient.to_string(),
            thumbnail: format!("/images/services/{}.webp", self.id),
            media,
        }
    }
}

/// 網站上展示的全部服務，順序即目錄順序（同優先級時的排序依據）
pub fn builtin_services() -> Vec<Service> {
    vec![
        ServiceDef {
            id: "chatbot-inteligente",
            title: "Chatbot Inteligente",
            subtitle: "Atención al cliente 24/7 con IA",
            description: "Un asistente conversacional entrenado con la información de tu negocio que responde preguntas frecuentes y agenda citas en web y WhatsApp.",
            benefits: &[
                "Respuestas inmediatas a cualquier hora",
                "Reduce hasta un 70% las consultas repetitivas",
                "Integración con WhatsApp, web e Instagram",
            ],
            delivery_time: "2-3 semanas",
            category: Category::AiAssistant,
            super_category: SuperCategory::Operation,
            priority: 1,
            featured: true,
            status: ServiceStatus::Active,
            tags: &["chatbot", "whatsapp", "atención al cliente", "24/7"],
            color: "#6C5CE7",
            gradient: "linear-gradient(135deg, #6C5CE7 0%, #A29BFE 100%)",
            video: Some("/videos/chatbot-demo.mp4"),
        }
        .build(),
        ServiceDef {
            id: "cazador-leads",
            title: "Cazador de Leads",
            subtitle: "Prospección automática de clientes potenciales",
            description: "Localiza, cualifica y enriquece contactos de empresas que encajan con tu cliente ideal y los entrega listos en tu CRM.",
            benefits: &[
                "Listas de prospectos actualizadas cada semana",
                "Datos de contacto verificados",
                "Mensajes de primer contacto personalizados",
            ],
            delivery_time: "1-2 semanas",
            category: Category::Automation,
            super_category: SuperCategory::Operation,
            priority: 1,
            featured: true,
            status: ServiceStatus::Active,
            tags: &["leads", "prospección", "linkedin", "ventas"],
            color: "#00B894",
            gradient: "linear-gradient(135deg, #00B894 0%, #55EFC4 100%)",
            video: Some("/videos/cazador-leads-demo.mp4"),
        }
        .build(),
        ServiceDef {
            id: "automatizacion-procesos",
            title: "Automatización de Procesos",
            subtitle: "Flujos de trabajo que se ejecutan solos",
            description: "Conectamos tus herramientas y eliminamos tareas manuales con flujos automatizados: facturación, reportes, altas de clientes y más.",
            benefits: &[
                "Ahorro de horas de trabajo administrativo",
                "Menos errores humanos",
                "Procesos documentados y medibles",
            ],
            delivery_time: "2-4 semanas",
            category: Category::Automation,
            super_category: SuperCategory::Operation,
            priority: 2,
            featured: true,
            status: ServiceStatus::Active,
            tags: &["n8n", "workflows", "integraciones"],
            color: "#0984E3",
            gradient: "linear-gradient(135deg, #0984E3 0%, #74B9FF 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "asistente-voz",
            title: "Asistente de Voz",
            subtitle: "Recepcionista virtual para llamadas",
            description: "Atiende llamadas entrantes con voz natural, responde dudas y deriva a la persona adecuada cuando hace falta.",
            benefits: &[
                "Ninguna llamada perdida",
                "Transcripción y resumen de cada conversación",
            ],
            delivery_time: "3-4 semanas",
            category: Category::AiAssistant,
            super_category: SuperCategory::Operation,
            priority: 3,
            featured: false,
            status: ServiceStatus::Active,
            tags: &["voz", "llamadas", "recepcionista"],
            color: "#E17055",
            gradient: "linear-gradient(135deg, #E17055 0%, #FAB1A0 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "dashboard-analitica",
            title: "Dashboard de Analítica",
            subtitle: "Tus métricas clave en un solo lugar",
            description: "Unificamos datos de ventas, marketing y operaciones en un panel interactivo con indicadores que se actualizan solos.",
            benefits: &[
                "Decisiones basadas en datos reales",
                "Alertas cuando un indicador se desvía",
                "Acceso desde cualquier dispositivo",
            ],
            delivery_time: "2-3 semanas",
            category: Category::Analytics,
            super_category: SuperCategory::Strategy,
            priority: 2,
            featured: true,
            status: ServiceStatus::Active,
            tags: &["dashboard", "kpis", "business intelligence"],
            color: "#FDCB6E",
            gradient: "linear-gradient(135deg, #FDCB6E 0%, #FFEAA7 100%)",
            video: Some("/videos/dashboard-demo.mp4"),
        }
        .build(),
        ServiceDef {
            id: "prediccion-ventas",
            title: "Predicción de Ventas",
            subtitle: "Anticípate a la demanda",
            description: "Modelos de aprendizaje automático que estiman la demanda futura a partir de tu histórico para planificar inventario y campañas.",
            benefits: &["Menos roturas de stock", "Presupuestos más precisos"],
            delivery_time: "4-6 semanas",
            category: Category::Analytics,
            super_category: SuperCategory::Strategy,
            priority: 4,
            featured: false,
            status: ServiceStatus::Active,
            tags: &["forecasting", "machine learning", "ventas"],
            color: "#E84393",
            gradient: "linear-gradient(135deg, #E84393 0%, #FD79A8 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "tienda-ia",
            title: "Tienda Online con IA",
            subtitle: "Recomendaciones que aumentan el ticket medio",
            description: "Incorporamos a tu tienda recomendaciones personalizadas, búsqueda inteligente y recuperación de carritos abandonados.",
            benefits: &[
                "Más conversiones por visita",
                "Experiencia de compra personalizada",
            ],
            delivery_time: "3-5 semanas",
            category: Category::Ecommerce,
            super_category: SuperCategory::Operation,
            priority: 3,
            featured: false,
            status: ServiceStatus::Active,
            tags: &["shopify", "recomendaciones", "carrito"],
            color: "#00CEC9",
            gradient: "linear-gradient(135deg, #00CEC9 0%, #81ECEC 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "atencion-postventa",
            title: "Atención Postventa Automatizada",
            subtitle: "Seguimiento de pedidos sin intervención",
            description: "Informa del estado de cada pedido, gestiona devoluciones y recoge opiniones de forma automática.",
            benefits: &["Clientes informados en todo momento", "Menos tickets de soporte"],
            delivery_time: "2-3 semanas",
            category: Category::Ecommerce,
            super_category: SuperCategory::Operation,
            priority: 5,
            featured: false,
            status: ServiceStatus::Active,
            tags: &["devoluciones", "seguimiento", "soporte"],
            color: "#55A3FF",
            gradient: "linear-gradient(135deg, #55A3FF 0%, #A3CBFF 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "formacion-equipos",
            title: "Formación en IA para Equipos",
            subtitle: "Talleres prácticos para tu plantilla",
            description: "Sesiones aplicadas al día a día de cada departamento para usar herramientas de IA generativa con seguridad y criterio.",
            benefits: &[
                "Equipos más productivos desde la primera semana",
                "Guías de uso responsable",
            ],
            delivery_time: "1 semana",
            category: Category::Training,
            super_category: SuperCategory::Strategy,
            priority: 4,
            featured: false,
            status: ServiceStatus::Active,
            tags: &["talleres", "chatgpt", "productividad"],
            color: "#A29BFE",
            gradient: "linear-gradient(135deg, #A29BFE 0%, #DFE6E9 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "academia-ia-directivos",
            title: "Academia IA para Directivos",
            subtitle: "Programa ejecutivo de transformación",
            description: "Programa para equipos de dirección sobre cómo priorizar, financiar y gobernar iniciativas de inteligencia artificial.",
            benefits: &["Visión estratégica compartida", "Casos reales del sector"],
            delivery_time: "6 semanas",
            category: Category::Training,
            super_category: SuperCategory::Strategy,
            priority: 6,
            featured: false,
            status: ServiceStatus::ComingSoon,
            tags: &["liderazgo", "estrategia"],
            color: "#2D3436",
            gradient: "linear-gradient(135deg, #2D3436 0%, #636E72 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "consultoria-estrategica",
            title: "Consultoría Estratégica en IA",
            subtitle: "Hoja de ruta a medida",
            description: "Analizamos tu negocio, detectamos oportunidades de alto impacto y definimos un plan de implantación por fases.",
            benefits: &[
                "Priorización por retorno de inversión",
                "Plan de acción con plazos claros",
                "Acompañamiento en la ejecución",
            ],
            delivery_time: "2 semanas",
            category: Category::Consulting,
            super_category: SuperCategory::Strategy,
            priority: 1,
            featured: true,
            status: ServiceStatus::Active,
            tags: &["diagnóstico", "roadmap", "estrategia"],
            color: "#D63031",
            gradient: "linear-gradient(135deg, #D63031 0%, #FF7675 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "auditoria-procesos",
            title: "Auditoría de Procesos",
            subtitle: "Descubre dónde pierdes tiempo y dinero",
            description: "Revisión detallada de tus procesos operativos con un informe de mejoras y su impacto estimado.",
            benefits: &["Informe con ahorro estimado", "Recomendaciones priorizadas"],
            delivery_time: "1-2 semanas",
            category: Category::Consulting,
            super_category: SuperCategory::Strategy,
            priority: 5,
            featured: false,
            status: ServiceStatus::Active,
            tags: &["auditoría", "eficiencia", "roi"],
            color: "#636E72",
            gradient: "linear-gradient(135deg, #636E72 0%, #B2BEC3 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "generador-contenido",
            title: "Generador de Contenido",
            subtitle: "Publicaciones constantes con tu tono de marca",
            description: "Produce borradores de artículos, correos y publicaciones para redes sociales alineados con tu estilo.",
            benefits: &["Calendario editorial siempre lleno", "Revisión humana incluida"],
            delivery_time: "1-2 semanas",
            category: Category::Automation,
            super_category: SuperCategory::Operation,
            priority: 4,
            featured: false,
            status: ServiceStatus::Active,
            tags: &["contenido", "redes sociales", "copywriting"],
            color: "#FD79A8",
            gradient: "linear-gradient(135deg, #FD79A8 0%, #FAB1A0 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "agente-documentos",
            title: "Agente de Documentos",
            subtitle: "Extracción automática de datos",
            description: "Lee facturas, albaranes y contratos, extrae los datos relevantes y los registra en tus sistemas.",
            benefits: &["Fin de la entrada manual de datos"],
            delivery_time: "3-4 semanas",
            category: Category::AiAssistant,
            super_category: SuperCategory::Operation,
            priority: 6,
            featured: false,
            status: ServiceStatus::Inactive,
            tags: &["documentos", "ocr", "facturas"],
            color: "#74B9FF",
            gradient: "linear-gradient(135deg, #74B9FF 0%, #DFE6E9 100%)",
            video: None,
        }
        .build(),
        ServiceDef {
            id: "integracion-crm",
            title: "Integración con CRM",
            subtitle: "Sincronización de contactos y oportunidades",
            description: "Conector entre formularios web y el CRM comercial, sustituido por los flujos de automatización de procesos.",
            benefits: &["Contactos sincronizados sin duplicados"],
            delivery_time: "1 semana",
            category: Category::Automation,
            super_category: SuperCategory::Operation,
            priority: 7,
            featured: false,
            status: ServiceStatus::Deprecated,
            tags: &["crm", "hubspot", "sincronización"],
            color: "#B2BEC3",
            gradient: "linear-gradient(135deg, #B2BEC3 0%, #DFE6E9 100%)",
            video: None,
        }
        .build(),
    ]
}

use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use serde::Serialize;

use crate::domain::ServiceKind;

/// One entry in the public service catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: ServiceKind,
    pub name: &'static str,
    pub description: &'static str,
    pub starting_price: u32,
    pub currency: &'static str,
    pub features: &'static [&'static str],
}

/// The fixed catalog served by `GET /api/services`, built once at startup
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    offerings: Vec<ServiceOffering>,
}

impl ServiceCatalog {
    pub fn standard() -> Self {
        let offerings = vec![
            ServiceOffering {
                id: ServiceKind::Website,
                name: "AI-Powered Websites",
                description: "Professional websites that convert visitors into customers",
                starting_price: 25000,
                currency: "PHP",
                features: &[
                    "Mobile-first responsive design",
                    "SEO optimization included",
                    "Conversion tracking setup",
                    "Performance monitoring",
                ],
            },
            ServiceOffering {
                id: ServiceKind::Chatbot,
                name: "Smart AI Chatbots",
                description: "24/7 customer service that captures leads automatically",
                starting_price: 15000,
                currency: "PHP",
                features: &[
                    "Custom conversation flows",
                    "Lead qualification system",
                    "Multi-platform integration",
                    "Analytics & insights",
                ],
            },
            ServiceOffering {
                id: ServiceKind::Marketing,
                name: "Marketing Assets",
                description: "Professional graphics and branded content",
                starting_price: 8000,
                currency: "PHP",
                features: &[
                    "Brand identity design",
                    "Social media templates",
                    "Marketing materials",
                    "Brand guidelines",
                ],
            },
            ServiceOffering {
                id: ServiceKind::Automation,
                name: "AI Workflow Automation",
                description: "Custom automation systems for business processes",
                starting_price: 12000,
                currency: "PHP",
                features: &[
                    "Process automation",
                    "Tool integrations",
                    "Data synchronization",
                    "Custom workflows",
                ],
            },
        ];

        Self { offerings }
    }

    pub fn offerings(&self) -> &[ServiceOffering] {
        &self.offerings
    }
}

#[derive(Debug, Serialize)]
struct CatalogResponse<'a> {
    success: bool,
    data: &'a [ServiceOffering],
}

/// Service catalog endpoint
#[tracing::instrument(name = "List service offerings", skip(catalog))]
#[get("/services")]
async fn list(catalog: web::Data<ServiceCatalog>) -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        success: true,
        data: catalog.offerings(),
    })
}

/// Read-only API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/api").service(list)
}

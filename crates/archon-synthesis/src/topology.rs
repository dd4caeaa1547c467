//! Deterministic services, data flows, and storage for a decided plan.

use archon_core::models::{
    ComponentKind, DataFlow, Elaboration, Pattern, SelectedComponent, ServiceComponent, Topology,
};

/// Default role, technologies, and backing store for a component kind.
struct Profile {
    role: &'static str,
    technologies: &'static [&'static str],
    storage: Option<&'static str>,
}

const GENERIC: Profile = Profile {
    role: "Supporting component",
    technologies: &[],
    storage: None,
};

fn profile(kind: &ComponentKind) -> Profile {
    let (role, technologies, storage): (&str, &[&str], Option<&str>) = match kind.as_str() {
        "api" => ("Request routing, validation, business logic", &["REST", "OpenAPI"], None),
        "api-gateway" => ("Single entry point, routing, rate limiting", &["Envoy", "Kong"], None),
        "service" => ("Owns one bounded context behind an API", &["REST", "gRPC"], None),
        "database" => ("System of record", &["PostgreSQL"], Some("Relational database")),
        "queue" => ("Buffer work and decouple producers from consumers", &["RabbitMQ", "SQS"], None),
        "worker" => ("Asynchronous background processing", &["Job runner"], None),
        "functions" => ("Stateless request handlers", &["AWS Lambda", "Azure Functions"], None),
        "stream" => ("Ordered event log for ingestion", &["Kafka"], Some("Event log")),
        "ml-service" => ("Model inference behind an API", &["Python", "ONNX Runtime"], None),
        "vector-db" => ("Embedding storage and similarity search", &["pgvector", "Qdrant"], Some("Vector index")),
        "cache" => ("Hot read path and session state", &["Redis"], Some("In-memory cache")),
        "auth" => ("Identity, sessions, and access control", &["OAuth 2.0", "OIDC"], None),
        "frontend" => ("User-facing web client", &["React", "TypeScript"], None),
        "cdn" => ("Static asset delivery at the edge", &["CloudFront"], None),
        "object-storage" => ("Blobs, uploads, and generated artifacts", &["S3"], Some("Object storage")),
        "search" => ("Full-text search and indexing", &["OpenSearch"], Some("Search index")),
        "monitoring" => ("Metrics, logs, and alerting", &["Prometheus", "Grafana"], None),
        _ => return GENERIC,
    };
    Profile {
        role,
        technologies,
        storage,
    }
}

/// `(source, destination, description)` edges for the pattern archetype.
fn pattern_flows(pattern: Pattern) -> &'static [(&'static str, &'static str, &'static str)] {
    match pattern {
        Pattern::Monolith => &[
            ("client", "api", "Submit requests"),
            ("api", "database", "Persist application state"),
        ],
        Pattern::Microservices => &[
            ("client", "api-gateway", "Submit requests"),
            ("api-gateway", "service", "Route to the owning service"),
            ("service", "queue", "Publish cross-service events"),
            ("service", "database", "Persist service-owned data"),
        ],
        Pattern::EventDriven => &[
            ("client", "api", "Submit requests"),
            ("api", "queue", "Publish events"),
            ("queue", "worker", "Consume and process events"),
            ("worker", "database", "Persist results"),
        ],
        Pattern::Serverless => &[
            ("client", "api-gateway", "Submit requests"),
            ("api-gateway", "functions", "Invoke handlers"),
            ("functions", "database", "Store outputs"),
        ],
        Pattern::DataPlatform => &[
            ("producers", "stream", "Ingest raw events"),
            ("stream", "worker", "Transform and enrich"),
            ("worker", "database", "Write curated datasets"),
        ],
        Pattern::MlSystem => &[
            ("client", "api", "Submit requests"),
            ("api", "ml-service", "Request predictions"),
            ("ml-service", "vector-db", "Similarity lookup"),
            ("api", "database", "Persist requests and outcomes"),
        ],
    }
}

fn pattern_storage(pattern: Pattern) -> &'static [&'static str] {
    match pattern {
        Pattern::Monolith => &["Relational database"],
        Pattern::Microservices | Pattern::EventDriven => &["Relational database", "Object storage"],
        Pattern::Serverless => &["Object storage"],
        Pattern::DataPlatform => &["Data warehouse", "Object storage"],
        Pattern::MlSystem => &["Relational database", "Object storage"],
    }
}

/// One service per selected component with its default profile, overridden
/// by any non-empty role or technology list from a validated elaboration.
pub fn build_topology(
    pattern: Pattern,
    selected: &[SelectedComponent],
    elaboration: Option<&Elaboration>,
) -> Topology {
    let services = selected
        .iter()
        .map(|c| {
            let defaults = profile(&c.kind);
            let note = elaboration
                .and_then(|e| e.component_notes.iter().find(|n| n.kind == c.kind));
            let role = note
                .map(|n| n.role.trim())
                .filter(|r| !r.is_empty())
                .unwrap_or(defaults.role)
                .to_string();
            let technologies = match note {
                Some(n) if !n.technologies.is_empty() => n.technologies.clone(),
                _ => defaults.technologies.iter().map(|t| t.to_string()).collect(),
            };
            ServiceComponent {
                kind: c.kind.clone(),
                role,
                technologies,
            }
        })
        .collect();

    let data_flows = pattern_flows(pattern)
        .iter()
        .map(|(source, destination, description)| DataFlow {
            source: source.to_string(),
            destination: destination.to_string(),
            description: description.to_string(),
        })
        .collect();

    let mut storage: Vec<String> = Vec::new();
    let extra = selected.iter().filter_map(|c| profile(&c.kind).storage);
    for store in pattern_storage(pattern).iter().copied().chain(extra) {
        if !storage.iter().any(|s| s == store) {
            storage.push(store.to_string());
        }
    }

    Topology {
        services,
        data_flows,
        storage,
    }
}

//! Built-in Cartagena catalogue used to populate an empty database.

use rust_decimal_macros::dec;

use crate::domain::{Listing, NewProperty, PropertyDetails, StayTerms};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn photo(id: &str) -> String {
    format!("https://images.unsplash.com/photo-{id}?w=800&h=600&fit=crop")
}

fn photos(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| photo(id)).collect()
}

/// The six seed listings: three for sale, three for rent.
#[must_use]
pub fn catalog() -> Vec<NewProperty> {
    vec![
        villa_frente_al_mar(),
        apartamento_centro_historico(),
        penthouse_bocagrande(),
        casa_colonial_getsemani(),
        apartamento_manga(),
        loft_la_matuna(),
    ]
}

fn villa_frente_al_mar() -> NewProperty {
    NewProperty::new(PropertyDetails {
        description: Some(
            "Espectacular villa moderna con acceso directo a la playa, piscina infinita y \
             acabados de lujo. Diseñada por arquitectos reconocidos internacionalmente, esta \
             propiedad única combina elegancia contemporánea con la calidez tropical de Cartagena."
                .into(),
        ),
        neighborhood: Some("Bocagrande".into()),
        address: Some("Avenida San Martín #47-123, Bocagrande".into()),
        bedrooms: 5,
        bathrooms: 6,
        sqft: 450.0,
        image_url: Some(photo("1580587771525-78b9dba3b914")),
        images: photos(&[
            "1580587771525-78b9dba3b914",
            "1512917774080-9991f1c4c750",
            "1613490493576-7fde63acd811",
        ]),
        features: strings(&[
            "Playa Privada",
            "Piscina Infinita",
            "Gimnasio",
            "Bodega de Vinos",
            "Cocina Gourmet",
        ]),
        amenities: strings(&[
            "Seguridad 24/7",
            "Servicio de Playa",
            "Concierge",
            "Spa",
            "Marina Privada",
        ]),
        nearby_attractions: strings(&[
            "Club de Playa Bocagrande",
            "Centro Comercial La Serrezuela",
            "Restaurante Club de Pesca",
        ]),
        agent_name: Some("Laura Gómez".into()),
        agent_contact: Some("laura.gomez@luxurycartagena.com".into()),
        is_luxury: true,
        is_oceanfront: true,
        is_featured: true,
        latitude: Some(10.3997),
        longitude: Some(-75.5144),
        video_url: Some("https://www.youtube.com/watch?v=example1".into()),
        virtual_tour_url: Some("https://virtualtour.example.com/villa1".into()),
        terms: StayTerms {
            max_guests: Some(10),
            ..StayTerms::default()
        },
        ..PropertyDetails::new(
            "Villa de Lujo Frente al Mar",
            "Bocagrande, Cartagena",
            Listing::Sale {
                price: Some(dec!(2800000000)),
            },
        )
    })
}

fn apartamento_centro_historico() -> NewProperty {
    NewProperty::new(PropertyDetails {
        description: Some(
            "Elegante apartamento colonial restaurado en el corazón del centro histórico. Esta \
             joya arquitectónica conserva elementos originales del siglo XVII mientras ofrece \
             todas las comodidades modernas."
                .into(),
        ),
        neighborhood: Some("Centro Histórico".into()),
        address: Some("Calle de los Santos de Piedra #33-41".into()),
        bedrooms: 2,
        bathrooms: 2,
        sqft: 120.0,
        image_url: Some(photo("1613490493576-7fde63acd811")),
        images: photos(&[
            "1613490493576-7fde63acd811",
            "1560448204-e02f11c3d0e2",
            "1617826359993-23a5165b4617",
        ]),
        features: strings(&["Balcón Colonial", "AC Central", "WiFi", "Terraza Privada"]),
        amenities: strings(&[
            "WiFi de Alta Velocidad",
            "Aire Acondicionado",
            "Cocina Equipada",
            "TV por Cable",
        ]),
        nearby_attractions: strings(&[
            "Plaza de Armas",
            "Catedral de Cartagena",
            "Museo del Oro Zenú",
        ]),
        agent_name: Some("Carlos Rivas".into()),
        agent_contact: Some("carlos.rivas@luxurycartagena.com".into()),
        is_luxury: true,
        is_featured: true,
        latitude: Some(10.4236),
        longitude: Some(-75.5478),
        terms: StayTerms {
            min_stay: Some(3),
            max_guests: Some(4),
            check_in_time: Some("15:00".into()),
            check_out_time: Some("11:00".into()),
            house_rules: Some("No fumar, No mascotas, No fiestas".into()),
            cancellation_policy: Some("Cancelación gratuita hasta 7 días antes".into()),
        },
        ..PropertyDetails::new(
            "Apartamento Ejecutivo Centro Histórico",
            "Ciudad Amurallada, Cartagena",
            Listing::Rental {
                price_per_night: Some(dec!(450000)),
            },
        )
    })
}

fn penthouse_bocagrande() -> NewProperty {
    NewProperty::new(PropertyDetails {
        description: Some(
            "Exclusivo penthouse con terraza panorámica y vista 360° al mar Caribe. Ubicado en \
             el edificio más prestigioso de Bocagrande, ofrece servicios de hotel cinco estrellas."
                .into(),
        ),
        neighborhood: Some("Bocagrande".into()),
        address: Some("Carrera 1 #8-89, Torre Aquarela, Piso 28".into()),
        bedrooms: 4,
        bathrooms: 5,
        sqft: 380.0,
        image_url: Some(photo("1560448204-e02f11c3d0e2")),
        images: photos(&[
            "1560448204-e02f11c3d0e2",
            "1522708323590-d24dbb6b0267",
            "1502672260266-1c1ef2d93688",
        ]),
        features: strings(&[
            "Terraza 360°",
            "Jacuzzi",
            "Ascensor Privado",
            "Smart Home",
            "Bodega Climatizada",
        ]),
        amenities: strings(&[
            "Piscina Infinita",
            "Spa",
            "Gimnasio",
            "Valet Parking",
            "Room Service",
        ]),
        nearby_attractions: strings(&[
            "Playa de Bocagrande",
            "Casino Rio",
            "Centro Comercial Bocagrande",
        ]),
        agent_name: Some("Sofía Pérez".into()),
        agent_contact: Some("sofia.perez@luxurycartagena.com".into()),
        is_luxury: true,
        is_oceanfront: true,
        is_featured: true,
        latitude: Some(10.3997),
        longitude: Some(-75.5144),
        video_url: Some("https://www.youtube.com/watch?v=example2".into()),
        virtual_tour_url: Some("https://virtualtour.example.com/penthouse1".into()),
        terms: StayTerms {
            max_guests: Some(8),
            ..StayTerms::default()
        },
        ..PropertyDetails::new(
            "Penthouse Moderno Bocagrande",
            "Bocagrande, Cartagena",
            Listing::Sale {
                price: Some(dec!(3500000000)),
            },
        )
    })
}

fn casa_colonial_getsemani() -> NewProperty {
    NewProperty::new(PropertyDetails {
        description: Some(
            "Auténtica casa colonial con patio central y arte urbano en las cercanías. \
             Perfectamente renovada manteniendo su encanto histórico mientras incorpora \
             tecnología moderna."
                .into(),
        ),
        neighborhood: Some("Getsemaní".into()),
        address: Some("Calle del Arsenal #25-18".into()),
        bedrooms: 3,
        bathrooms: 3,
        sqft: 200.0,
        image_url: Some(photo("1617826359993-23a5165b4617")),
        images: photos(&[
            "1617826359993-23a5165b4617",
            "1628744444594-5a345107e335",
            "1618221195710-dd6b41faaea6",
        ]),
        features: strings(&[
            "Patio Central",
            "Arte Local",
            "Cocina Gourmet",
            "Terraza en Azotea",
        ]),
        amenities: strings(&["WiFi", "AC", "Cocina Completa", "Lavadora"]),
        nearby_attractions: strings(&[
            "Plaza de la Trinidad",
            "Murallas de Cartagena",
            "Café Havana",
        ]),
        agent_name: Some("Andrés Jaramillo".into()),
        agent_contact: Some("andres.jaramillo@luxurycartagena.com".into()),
        latitude: Some(10.4278),
        longitude: Some(-75.5456),
        terms: StayTerms {
            min_stay: Some(2),
            max_guests: Some(6),
            check_in_time: Some("14:00".into()),
            check_out_time: Some("11:00".into()),
            house_rules: Some(
                "No fumar en interiores, Mascotas permitidas con depósito adicional".into(),
            ),
            cancellation_policy: Some("Cancelación moderada - 5 días antes".into()),
        },
        ..PropertyDetails::new(
            "Casa Colonial Getsemaní",
            "Getsemaní, Cartagena",
            Listing::Rental {
                price_per_night: Some(dec!(380000)),
            },
        )
    })
}

fn apartamento_manga() -> NewProperty {
    NewProperty::new(PropertyDetails {
        description: Some(
            "Moderno apartamento en exclusivo conjunto residencial con amenidades completas. \
             Diseño contemporáneo con vistas panorámicas de la bahía de Cartagena."
                .into(),
        ),
        neighborhood: Some("Manga".into()),
        address: Some("Avenida Primera de Manga #22-45".into()),
        bedrooms: 3,
        bathrooms: 3,
        sqft: 180.0,
        image_url: Some(photo("1522708323590-d24dbb6b0267")),
        images: photos(&["1522708323590-d24dbb6b0267", "1588880331179-bc9b93a8cb5e"]),
        features: strings(&[
            "Piscina",
            "Zona BBQ",
            "Seguridad 24h",
            "Gimnasio",
            "Salón Social",
        ]),
        amenities: strings(&[
            "Piscina",
            "Gimnasio",
            "Zona BBQ",
            "Parqueadero",
            "Portería",
        ]),
        nearby_attractions: strings(&[
            "Club Naval",
            "Manga Beach",
            "Centro Comercial La Plazuela",
        ]),
        agent_name: Some("María Fernández".into()),
        agent_contact: Some("maria.fernandez@luxurycartagena.com".into()),
        latitude: Some(10.4089),
        longitude: Some(-75.5356),
        terms: StayTerms {
            max_guests: Some(6),
            ..StayTerms::default()
        },
        ..PropertyDetails::new(
            "Apartamento Moderno Manga",
            "Manga, Cartagena",
            Listing::Sale {
                price: Some(dec!(1200000000)),
            },
        )
    })
}

fn loft_la_matuna() -> NewProperty {
    NewProperty::new(PropertyDetails {
        description: Some(
            "Creativo loft con diseño moderno en el emergente barrio de La Matuna. Espacio \
             versátil perfecto para creativos y profesionales que buscan un ambiente único."
                .into(),
        ),
        neighborhood: Some("La Matuna".into()),
        address: Some("Calle 30 #17-89".into()),
        bedrooms: 1,
        bathrooms: 1,
        sqft: 85.0,
        image_url: Some(photo("1502672260266-1c1ef2d93688")),
        images: photos(&["1502672260266-1c1ef2d93688"]),
        features: strings(&["Diseño Único", "Luz Natural", "Zona Trabajo", "Techos Altos"]),
        amenities: strings(&[
            "WiFi de Alta Velocidad",
            "AC",
            "Cocina Americana",
            "Balcón",
        ]),
        nearby_attractions: strings(&[
            "Centro de Cartagena",
            "Parque del Centenario",
            "Universidad de Cartagena",
        ]),
        agent_name: Some("Diego Martínez".into()),
        agent_contact: Some("diego.martinez@luxurycartagena.com".into()),
        latitude: Some(10.4167),
        longitude: Some(-75.55),
        terms: StayTerms {
            min_stay: Some(1),
            max_guests: Some(2),
            check_in_time: Some("15:00".into()),
            check_out_time: Some("11:00".into()),
            house_rules: Some("No fumar, No mascotas, Respetar horarios de silencio".into()),
            cancellation_policy: Some("Cancelación flexible".into()),
        },
        ..PropertyDetails::new(
            "Loft Artístico La Matuna",
            "La Matuna, Cartagena",
            Listing::Rental {
                price_per_night: Some(dec!(320000)),
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyKind;

    #[test]
    fn catalog_has_three_sales_and_three_rentals() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        let rentals = catalog
            .iter()
            .filter(|p| p.details.listing.kind() == PropertyKind::Rental)
            .count();
        assert_eq!(rentals, 3);
    }

    #[test]
    fn every_seed_property_is_valid() {
        for property in catalog() {
            assert!(
                property.validate().is_ok(),
                "{} failed validation",
                property.details.title
            );
        }
    }

    #[test]
    fn only_rentals_carry_a_minimum_stay() {
        for property in catalog() {
            if property.details.listing.kind() == PropertyKind::Sale {
                assert_eq!(property.details.terms.min_stay, None);
            }
        }
    }
}

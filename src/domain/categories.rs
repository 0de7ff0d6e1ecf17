//! Closed enumerations for every categorical field of the valuation form.
//!
//! Codes are the values the form submits; labels are what the form shows.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::ValuationError;

/// Shared surface of all categorical fields.
pub trait Category: Copy + Eq + FromStr<Err = ValuationError> + 'static {
    /// Field identifier used in error reports.
    const FIELD: &'static str;
    /// Form label for the field.
    const TITLE: &'static str;

    fn all() -> &'static [Self];
    fn code(self) -> &'static str;
    fn label(self) -> &'static str;
}

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, title = $title:literal {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl Category for $name {
            const FIELD: &'static str = $field;
            const TITLE: &'static str = $title;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValuationError;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code.trim() {
                    $($code => Ok($name::$variant),)+
                    other => Err(ValuationError::UnknownCategoryCode {
                        field: <Self as Category>::FIELD,
                        code: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

category! {
    /// Municipal valuation zone (polígono); sets the base land rate.
    Zone, field = "zone", title = "Localização (Polígono)" {
        Central => ("central", "Central"),
        MediumCentral => ("medio-central", "Médio Central"),
        Intermediate => ("intermediario", "Intermediário"),
        MediumIntermediate => ("medio-intermediario", "Médio-Intermediário"),
        IntermediatePeripheral => ("intermediario-periferico", "Intermediário-Periférico"),
        Peripheral => ("periferico", "Periférico"),
    }
}

category! {
    /// Construction type; sets the base building rate.
    BuildingType, field = "building_type", title = "Tipo de Edificação" {
        House => ("casa", "Casa"),
        Apartment => ("apartamento", "Apartamento"),
        Shed => ("galpao", "Galpão"),
        LeanTo => ("telheiro", "Telheiro"),
        Shop => ("loja", "Loja"),
        Industrial => ("industria", "Indústria"),
        Other => ("outros", "Outros"),
    }
}

category! {
    Topography, field = "topography", title = "Topografia" {
        Flat => ("plano", "Plano"),
        Uphill => ("aclive", "Aclive"),
        Downhill => ("declive", "Declive"),
    }
}

category! {
    Situation, field = "situation", title = "Situação" {
        OneFrontage => ("uma-frente", "Uma Frente"),
        Corner => ("esquina", "Esquina/Duas Frentes"),
        Landlocked => ("encravado", "Encravado"),
    }
}

category! {
    /// Soil condition (pedologia).
    Soil, field = "soil", title = "Pedologia" {
        Normal => ("normal", "Normal"),
        Sandy => ("arenoso", "Arenoso"),
        Rocky => ("rochoso", "Rochoso"),
        FloodProne => ("inundavel", "Inundável"),
        Waterlogged => ("alagado", "Alagado"),
    }
}

category! {
    /// External wall finish (revestimento).
    Finish, field = "finish", title = "Revestimento Externo" {
        None => ("sem-revestimento", "Sem Revestimento"),
        OilPaint => ("oleo", "Óleo"),
        Whitewash => ("caiacao", "Caiação"),
        Wood => ("madeira", "Madeira"),
        Other => ("outros", "Outros"),
    }
}

category! {
    Floor, field = "floor", title = "Piso" {
        BareEarth => ("terra-batida", "Terra Batida"),
        Cement => ("cimento", "Cimento"),
        Ceramic => ("ceramico", "Cerâmico/Mosaico"),
        Other => ("outros", "Outros"),
    }
}

category! {
    Ceiling, field = "ceiling", title = "Forro" {
        None => ("inexistente", "Inexistente"),
        Wood => ("madeira", "Madeira"),
        Plaster => ("estuque", "Estuque"),
        Slab => ("laje", "Laje"),
    }
}

category! {
    Roof, field = "roof", title = "Cobertura" {
        Thatch => ("palha", "Palha/Zinco/Cavaco"),
        FiberCement => ("fibro", "Fibro/Cimento"),
        Tile => ("telha", "Telha"),
        Slab => ("laje", "Laje"),
    }
}

category! {
    Sanitation, field = "sanitation", title = "Instalação Sanitária" {
        None => ("inexistente", "Inexistente"),
        External => ("externa", "Externa"),
        Internal => ("interna", "Interna"),
        MultipleInternal => ("mais-uma", "Mais de uma interna"),
    }
}

category! {
    Structure, field = "structure", title = "Estrutura" {
        Wood => ("madeira", "Madeira"),
        Masonry => ("alvenaria", "Alvenaria"),
        Metal => ("metalica", "Metálica"),
        Concrete => ("concreto", "Concreto"),
    }
}

category! {
    Electrical, field = "electrical", title = "Instalação Elétrica" {
        None => ("inexistente", "Inexistente"),
        Exposed => ("aparente", "Aparente"),
        Embedded => ("embutida", "Embutida"),
    }
}

category! {
    Conservation, field = "conservation", title = "Estado de Conservação" {
        Good => ("bom", "Bom"),
        Fair => ("regular", "Regular"),
        Poor => ("mau", "Mau"),
    }
}

category! {
    /// Placement of the building on the lot combined with its facade alignment.
    Position, field = "position", title = "Posição/Fachada" {
        IsolatedAligned => ("isolada-alinhada", "Isolada-alinhada"),
        IsolatedSetback => ("isolada-recuada", "Isolada-recuada"),
        TwinAligned => ("germinada-alinhada", "Germinada-alinhada"),
        TwinSetback => ("germinada-recuada", "Germinada-recuada"),
        SuperposedAligned => ("superposta-alinhada", "Superposta-alinhada"),
        SuperposedSetback => ("superposta-recuada", "Superposta-recuada"),
        AttachedAligned => ("conjugada-alinhada", "Conjugada-alinhada"),
        AttachedSetback => ("conjugada-recuada", "Conjugada-recuada"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_codes_round_trip<C: Category + fmt::Debug>() {
        for &variant in C::all() {
            assert_eq!(variant.code().parse::<C>(), Ok(variant));
        }
    }

    #[test]
    fn every_code_parses_back_to_its_variant() {
        assert_codes_round_trip::<Zone>();
        assert_codes_round_trip::<BuildingType>();
        assert_codes_round_trip::<Topography>();
        assert_codes_round_trip::<Situation>();
        assert_codes_round_trip::<Soil>();
        assert_codes_round_trip::<Finish>();
        assert_codes_round_trip::<Floor>();
        assert_codes_round_trip::<Ceiling>();
        assert_codes_round_trip::<Roof>();
        assert_codes_round_trip::<Sanitation>();
        assert_codes_round_trip::<Structure>();
        assert_codes_round_trip::<Electrical>();
        assert_codes_round_trip::<Conservation>();
        assert_codes_round_trip::<Position>();
    }

    #[test]
    fn unknown_code_is_rejected_with_field_name() {
        let err = "downtown".parse::<Zone>().unwrap_err();
        assert_eq!(
            err,
            ValuationError::UnknownCategoryCode {
                field: "zone",
                code: "downtown".to_string(),
            }
        );
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!("Central".parse::<Zone>().is_err());
        assert_eq!(" central ".parse::<Zone>(), Ok(Zone::Central));
    }

    #[test]
    fn same_code_in_different_tables_maps_independently() {
        assert_eq!("madeira".parse::<Finish>(), Ok(Finish::Wood));
        assert_eq!("madeira".parse::<Ceiling>(), Ok(Ceiling::Wood));
        assert_eq!("madeira".parse::<Structure>(), Ok(Structure::Wood));
        assert!("madeira".parse::<Floor>().is_err());
    }

    #[test]
    fn serde_uses_form_codes() {
        let json = serde_json::to_string(&Position::IsolatedSetback).unwrap();
        assert_eq!(json, "\"isolada-recuada\"");
        let zone: Zone = serde_json::from_str("\"medio-central\"").unwrap();
        assert_eq!(zone, Zone::MediumCentral);
    }

    #[test]
    fn variant_counts_match_tables() {
        assert_eq!(Zone::ALL.len(), 6);
        assert_eq!(BuildingType::ALL.len(), 7);
        assert_eq!(Soil::ALL.len(), 5);
        assert_eq!(Position::ALL.len(), 8);
    }
}

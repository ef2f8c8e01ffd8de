//! Shell de navegación
//!
//! Lista fija y ordenada de secciones del panel. "Resumen" solo
//! coincide con la ruta exacta; el resto también por prefijo, para que
//! una sub-ruta anidada siga resaltando su sección.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seccion {
    pub ruta: &'static str,
    pub etiqueta: &'static str,
    /// Coincidencia solo exacta (el caso del resumen).
    solo_exacta: bool,
}

pub const SECCIONES: [Seccion; 5] = [
    Seccion { ruta: "/dashboard", etiqueta: "Resumen", solo_exacta: true },
    Seccion { ruta: "/dashboard/usuarios", etiqueta: "Usuarios", solo_exacta: false },
    Seccion { ruta: "/dashboard/estudiantes", etiqueta: "Estudiantes", solo_exacta: false },
    Seccion { ruta: "/dashboard/colegios", etiqueta: "Colegios", solo_exacta: false },
    Seccion { ruta: "/dashboard/padreHijo", etiqueta: "Padre", solo_exacta: false },
];

impl Seccion {
    /// Determinar si esta sección debe resaltarse para la ruta actual.
    pub fn es_activa(&self, ruta_actual: &str) -> bool {
        if ruta_actual == self.ruta {
            return true;
        }
        if self.solo_exacta {
            return false;
        }
        ruta_actual.starts_with(&format!("{}/", self.ruta))
    }
}

/// Sección activa para una ruta, si alguna coincide.
pub fn seccion_activa(ruta_actual: &str) -> Option<&'static Seccion> {
    SECCIONES.iter().find(|s| s.es_activa(ruta_actual))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resumen_solo_coincide_exacto() {
        let resumen = &SECCIONES[0];
        assert!(resumen.es_activa("/dashboard"));
        assert!(!resumen.es_activa("/dashboard/usuarios"));
        assert!(!resumen.es_activa("/dashboard/"));
    }

    #[test]
    fn test_secciones_coinciden_por_prefijo() {
        let usuarios = &SECCIONES[1];
        assert!(usuarios.es_activa("/dashboard/usuarios"));
        assert!(usuarios.es_activa("/dashboard/usuarios/5/editar"));
        assert!(!usuarios.es_activa("/dashboard/usuariosviejos"));
    }

    #[test]
    fn test_seccion_activa_resuelve_subrutas() {
        assert_eq!(seccion_activa("/dashboard").unwrap().etiqueta, "Resumen");
        assert_eq!(
            seccion_activa("/dashboard/colegios/3").unwrap().etiqueta,
            "Colegios"
        );
        assert!(seccion_activa("/login").is_none());
    }
}

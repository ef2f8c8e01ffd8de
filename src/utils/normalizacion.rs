//! Normalización de campos de formulario
//!
//! Política uniforme aplicada antes de cada create/update: strings con
//! trim, opcionales vacíos viajan como `null` explícito (nunca `""`),
//! numéricos opcionales en blanco viajan como `null` (nunca `0`).

/// Campo de texto requerido: trim, error si queda vacío.
pub fn texto_requerido(valor: &str, campo: &str) -> Result<String, String> {
    let limpio = valor.trim();
    if limpio.is_empty() {
        return Err(format!("El campo {} es requerido.", campo));
    }
    Ok(limpio.to_string())
}

/// Campo de texto opcional: trim, vacío se vuelve ausencia explícita.
pub fn texto_opcional(valor: &str) -> Option<String> {
    let limpio = valor.trim();
    if limpio.is_empty() {
        None
    } else {
        Some(limpio.to_string())
    }
}

/// Igual que `texto_opcional` pero sobre un valor ya opcional (borradores
/// de edición, donde el campo puede venir ausente del servidor).
pub fn texto_opcional_de(valor: &Option<String>) -> Option<String> {
    valor.as_deref().and_then(|v| texto_opcional(v))
}

/// Numérico opcional a partir del texto crudo del formulario:
/// en blanco es ausencia; texto no numérico es error sin llamada de red.
pub fn numero_opcional(valor: &str, campo: &str) -> Result<Option<f64>, String> {
    let limpio = valor.trim();
    if limpio.is_empty() {
        return Ok(None);
    }
    limpio
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("El campo {} debe ser numérico.", campo))
}

/// Entero requerido (referencias foráneas como colegioId).
pub fn entero_requerido(valor: &str, campo: &str) -> Result<i64, String> {
    let limpio = valor.trim();
    if limpio.is_empty() {
        return Err(format!("El campo {} es requerido.", campo));
    }
    limpio
        .parse::<i64>()
        .map_err(|_| format!("El campo {} debe ser un entero.", campo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texto_requerido_con_trim() {
        assert_eq!(texto_requerido("  Colegio A  ", "nombre").unwrap(), "Colegio A");
        assert!(texto_requerido("   ", "nombre").is_err());
    }

    #[test]
    fn test_texto_opcional_vacio_es_ausencia() {
        assert_eq!(texto_opcional(""), None);
        assert_eq!(texto_opcional("   "), None);
        assert_eq!(texto_opcional(" Av. Siempre Viva "), Some("Av. Siempre Viva".to_string()));
    }

    #[test]
    fn test_numero_opcional_en_blanco_es_ausencia() {
        assert_eq!(numero_opcional("", "lat").unwrap(), None);
        assert_eq!(numero_opcional("  ", "lat").unwrap(), None);
        assert_eq!(numero_opcional("-17.39", "lat").unwrap(), Some(-17.39));
        assert!(numero_opcional("abc", "lat").is_err());
    }

    #[test]
    fn test_entero_requerido() {
        assert_eq!(entero_requerido(" 7 ", "colegioId").unwrap(), 7);
        assert!(entero_requerido("", "colegioId").is_err());
        assert!(entero_requerido("siete", "colegioId").is_err());
    }
}

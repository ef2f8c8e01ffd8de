//! Reconciliación de la colección local
//!
//! Reducer puro que aplica la respuesta del servidor sobre la copia
//! cacheada después de cada mutación. Separado del controlador para
//! poder probarlo sin red.

use crate::models::Recurso;

/// Evento resultante de una mutación exitosa.
pub enum Cambio<R: Recurso> {
    /// El servidor devolvió el registro creado (con id asignado).
    Creado(R),
    /// El servidor devolvió el registro actualizado.
    Actualizado(R),
    /// El registro identificado por la clave fue eliminado.
    Eliminado(R::Clave),
}

/// Aplicar un cambio sobre la lista cacheada.
///
/// Creado antepone el registro; Actualizado reemplaza exactamente el
/// registro cuya clave coincide y no toca ningún otro; Eliminado lo
/// quita por clave.
pub fn reconciliar<R: Recurso>(mut lista: Vec<R>, cambio: Cambio<R>) -> Vec<R> {
    match cambio {
        Cambio::Creado(registro) => {
            lista.insert(0, registro);
        }
        Cambio::Actualizado(registro) => {
            let clave = registro.clave();
            if let Some(existente) = lista.iter_mut().find(|r| r.clave() == clave) {
                *existente = registro;
            }
        }
        Cambio::Eliminado(clave) => {
            lista.retain(|r| r.clave() != clave);
        }
    }
    lista
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Colegio;
    use serde_json::json;

    fn colegio(id: i64, nombre: &str) -> Colegio {
        serde_json::from_value(json!({
            "id": id,
            "nombre": nombre,
            "direccion": null,
            "lat": null,
            "lon": null,
            "activo": true,
            "createdAt": "2025-03-01T12:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_creado_antepone_una_sola_vez() {
        let lista = vec![colegio(1, "A"), colegio(2, "B")];
        let lista = reconciliar(lista, Cambio::Creado(colegio(3, "C")));

        assert_eq!(lista.len(), 3);
        assert_eq!(lista[0].id, 3);
        assert_eq!(lista.iter().filter(|c| c.id == 3).count(), 1);
    }

    #[test]
    fn test_actualizado_reemplaza_solo_su_clave() {
        let lista = vec![colegio(1, "A"), colegio(2, "B")];
        let mut editado = colegio(2, "B renombrado");
        editado.activo = false;

        let lista = reconciliar(lista, Cambio::Actualizado(editado));

        assert_eq!(lista.len(), 2);
        assert_eq!(lista[0].nombre, "A");
        assert!(lista[0].activo);
        assert_eq!(lista[1].nombre, "B renombrado");
        assert!(!lista[1].activo);
    }

    #[test]
    fn test_actualizado_con_clave_ausente_no_cambia_nada() {
        let lista = vec![colegio(1, "A")];
        let lista = reconciliar(lista, Cambio::Actualizado(colegio(9, "fantasma")));

        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].nombre, "A");
    }

    #[test]
    fn test_eliminado_quita_exactamente_uno() {
        let lista = vec![colegio(1, "A"), colegio(2, "B"), colegio(3, "C")];
        let lista = reconciliar(lista, Cambio::Eliminado(2));

        assert_eq!(lista.len(), 2);
        assert!(lista.iter().all(|c| c.id != 2));
    }
}

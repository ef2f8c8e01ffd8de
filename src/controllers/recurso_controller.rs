//! Controlador genérico de lista + edición por recurso
//!
//! Una instancia por pantalla montada. Mantiene cuatro sub-estados que
//! pueden solaparse: colección cargada, alta en curso, borrador de
//! edición y eliminación en vuelo por registro. Toda mutación exitosa
//! se reconcilia contra la copia local; toda falla se vuelve un único
//! mensaje de página (la última pisa a la anterior).

use std::sync::Arc;

use crate::api::ApiGateway;
use crate::controllers::reconciliacion::{reconciliar, Cambio};
use crate::models::Recurso;

/// Estado de la colección. Se entra a `Cargando` una sola vez por
/// montaje; no hay reintento automático.
pub enum EstadoColeccion<R> {
    Cargando,
    Cargada(Vec<R>),
    Error(String),
}

/// Estado del flujo de edición. El borrador es una copia completa del
/// registro, separada de la lista hasta que se guarda.
enum EstadoEdicion<R> {
    Inactiva,
    Editando(R),
    Guardando(R),
}

pub struct RecursoController<R: Recurso> {
    gateway: Arc<ApiGateway>,
    coleccion: EstadoColeccion<R>,
    nuevo: R::Nuevo,
    creando: bool,
    edicion: EstadoEdicion<R>,
    eliminando: Option<R::Clave>,
    error: Option<String>,
}

impl<R: Recurso> RecursoController<R> {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            coleccion: EstadoColeccion::Cargando,
            nuevo: R::Nuevo::default(),
            creando: false,
            edicion: EstadoEdicion::Inactiva,
            eliminando: None,
            error: None,
        }
    }

    // --- colección ---

    /// Cargar la colección desde el servidor. El estado de error de
    /// carga queda en la colección misma, no como mensaje de página.
    pub async fn cargar(&mut self) {
        self.coleccion = EstadoColeccion::Cargando;
        match self.gateway.get::<Vec<R>>(R::ruta_coleccion()).await {
            Ok(registros) => self.coleccion = EstadoColeccion::Cargada(registros),
            Err(_) => self.coleccion = EstadoColeccion::Error(R::mensajes().cargar.to_string()),
        }
    }

    pub fn estado(&self) -> &EstadoColeccion<R> {
        &self.coleccion
    }

    /// Registros cacheados, si la carga fue exitosa.
    pub fn registros(&self) -> Option<&[R]> {
        match &self.coleccion {
            EstadoColeccion::Cargada(registros) => Some(registros),
            _ => None,
        }
    }

    fn buscar(&self, clave: &R::Clave) -> Option<R> {
        self.registros()?.iter().find(|r| r.clave() == *clave).cloned()
    }

    fn aplicar(&mut self, cambio: Cambio<R>) {
        if let EstadoColeccion::Cargada(registros) = &mut self.coleccion {
            let lista = std::mem::take(registros);
            *registros = reconciliar(lista, cambio);
        }
    }

    // --- alta ---

    /// Formulario de alta, editable por la vista.
    pub fn nuevo_mut(&mut self) -> &mut R::Nuevo {
        &mut self.nuevo
    }

    pub fn creando(&self) -> bool {
        self.creando
    }

    /// Enviar el formulario de alta. En éxito el registro devuelto por
    /// el servidor se antepone a la lista y el formulario se resetea;
    /// en falla el formulario queda poblado para corregirlo.
    pub async fn crear(&mut self) -> bool {
        let payload = match R::payload_crear(&self.nuevo) {
            Ok(p) => p,
            Err(mensaje) => {
                self.error = Some(mensaje);
                return false;
            }
        };

        self.error = None;
        self.creando = true;
        let resultado = self.gateway.post::<R>(R::ruta_coleccion(), &payload).await;
        self.creando = false;

        match resultado {
            Ok(registro) => {
                self.aplicar(Cambio::Creado(registro));
                self.nuevo = R::nuevo_tras_alta(&self.nuevo);
                true
            }
            Err(_) => {
                self.error = Some(R::mensajes().crear.to_string());
                false
            }
        }
    }

    // --- edición ---

    /// Tomar un registro de la lista como borrador de edición.
    pub fn iniciar_edicion(&mut self, clave: &R::Clave) {
        if let Some(registro) = self.buscar(clave) {
            self.edicion = EstadoEdicion::Editando(registro);
        }
    }

    /// Descartar el borrador sin llamada de red.
    pub fn cancelar_edicion(&mut self) {
        self.edicion = EstadoEdicion::Inactiva;
    }

    /// Borrador en curso, editable por la vista.
    pub fn borrador_mut(&mut self) -> Option<&mut R> {
        match &mut self.edicion {
            EstadoEdicion::Editando(borrador) => Some(borrador),
            _ => None,
        }
    }

    pub fn editando(&self) -> bool {
        !matches!(self.edicion, EstadoEdicion::Inactiva)
    }

    pub fn guardando(&self) -> bool {
        matches!(self.edicion, EstadoEdicion::Guardando(_))
    }

    /// Enviar el borrador. En éxito se reconcilia por clave y se sale
    /// de la edición; en falla se permanece editando el mismo borrador.
    pub async fn guardar(&mut self) -> bool {
        let EstadoEdicion::Editando(borrador) = std::mem::replace(&mut self.edicion, EstadoEdicion::Inactiva)
        else {
            return false;
        };

        let payload = match borrador.payload_actualizar() {
            Ok(p) => p,
            Err(mensaje) => {
                self.error = Some(mensaje);
                self.edicion = EstadoEdicion::Editando(borrador);
                return false;
            }
        };

        self.error = None;
        let ruta = R::ruta_registro(&borrador.clave());
        self.edicion = EstadoEdicion::Guardando(borrador);
        let resultado = self.gateway.patch::<R>(&ruta, &payload).await;

        match resultado {
            Ok(actualizado) => {
                self.aplicar(Cambio::Actualizado(actualizado));
                self.edicion = EstadoEdicion::Inactiva;
                true
            }
            Err(_) => {
                self.error = Some(R::mensajes().actualizar.to_string());
                if let EstadoEdicion::Guardando(borrador) =
                    std::mem::replace(&mut self.edicion, EstadoEdicion::Inactiva)
                {
                    self.edicion = EstadoEdicion::Editando(borrador);
                }
                false
            }
        }
    }

    // --- eliminación ---

    /// Clave con eliminación en vuelo, si la hay. La vista debe
    /// deshabilitar la acción para ese registro mientras tanto.
    pub fn eliminando(&self) -> Option<&R::Clave> {
        self.eliminando.as_ref()
    }

    /// Eliminar un registro, previa confirmación del usuario. Si la
    /// confirmación se rechaza no se emite ninguna llamada. Mientras
    /// hay una eliminación pendiente, reinvocar es un no-op.
    pub async fn eliminar<F>(&mut self, clave: R::Clave, confirmar: F) -> bool
    where
        F: FnOnce(&R) -> bool,
    {
        if self.eliminando.is_some() {
            return false;
        }
        let Some(registro) = self.buscar(&clave) else {
            return false;
        };
        if !confirmar(&registro) {
            return false;
        }

        self.error = None;
        self.eliminando = Some(clave.clone());
        let resultado = self.gateway.delete(&R::ruta_registro(&clave)).await;
        self.eliminando = None;

        match resultado {
            Ok(()) => {
                self.aplicar(Cambio::Eliminado(clave));
                true
            }
            Err(_) => {
                self.error = Some(R::mensajes().eliminar.to_string());
                false
            }
        }
    }

    // --- errores ---

    /// Mensaje de error de página: la última falla pisa a la anterior.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

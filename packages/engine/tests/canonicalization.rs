//! Integration tests for cadena original generation over the builtin
//! catalog, using real complement fixtures.

use cadena_engine::{cadena_digest, Canonicalizer, EngineError, RuleCatalog};
use pretty_assertions::assert_eq;
use roxmltree::Document;

/// Canonicalize an XML fixture against the builtin catalog.
fn cadena(xml: &str) -> Result<String, EngineError> {
    let catalog = RuleCatalog::builtin().expect("builtin catalog must load");
    let doc = Document::parse(xml).expect("fixture must be well-formed XML");
    Canonicalizer::new(&catalog).canonicalize(&doc.root_element())
}

const LEYENDAS: &str = r#"<ley:LeyendasFiscales xmlns:ley="http://www.sat.gob.mx/leyendasFiscales" version="1.0">
  <ley:Leyenda norma="NOM-001" textoLeyenda="Producto importado"/>
</ley:LeyendasFiscales>"#;

const AEROLINEAS: &str = r#"<aerolineas:Aerolineas xmlns:aerolineas="http://www.sat.gob.mx/aerolineas" Version="1.0" TUA="123.45">
  <aerolineas:OtrosCargos TotalCargos="50.00">
    <aerolineas:Cargo CodigoCargo="A" Importe="10.00"/>
    <aerolineas:Cargo CodigoCargo="B" Importe="40.00"/>
  </aerolineas:OtrosCargos>
</aerolineas:Aerolineas>"#;

#[test]
fn test_leyendas_golden_cadena() {
    // Root segment for the version, then one sub-segment per Leyenda with an
    // empty slot for the absent optional disposicionFiscal
    assert_eq!(cadena(LEYENDAS).unwrap(), "|1.0||NOM-001|Producto importado|");
}

#[test]
fn test_aerolineas_golden_cadena() {
    assert_eq!(cadena(AEROLINEAS).unwrap(), "|1.0|123.45|50.00|A|10.00|B|40.00|");
}

#[test]
fn test_determinism() {
    assert_eq!(cadena(LEYENDAS).unwrap(), cadena(LEYENDAS).unwrap());
    assert_eq!(cadena(AEROLINEAS).unwrap(), cadena(AEROLINEAS).unwrap());
}

#[test]
fn test_attribute_order_in_source_is_irrelevant() {
    // Same document, attribute storage order permuted; output order is
    // governed solely by field declaration order
    let permuted = r#"<ley:LeyendasFiscales version="1.0" xmlns:ley="http://www.sat.gob.mx/leyendasFiscales">
  <ley:Leyenda textoLeyenda="Producto importado" norma="NOM-001"/>
</ley:LeyendasFiscales>"#;
    assert_eq!(cadena(permuted).unwrap(), cadena(LEYENDAS).unwrap());
}

#[test]
fn test_required_attribute_enforced() {
    let missing_tua = r#"<aerolineas:Aerolineas xmlns:aerolineas="http://www.sat.gob.mx/aerolineas" Version="1.0"/>"#;
    let err = cadena(missing_tua).unwrap_err();
    assert!(matches!(
        err,
        EngineError::RequiredFieldMissing { ref element, ref field }
            if element == "Aerolineas" && field == "TUA"
    ));
}

#[test]
fn test_required_repeated_child_enforced() {
    let empty_cargos = r#"<aerolineas:Aerolineas xmlns:aerolineas="http://www.sat.gob.mx/aerolineas" Version="1.0" TUA="123.45">
  <aerolineas:OtrosCargos TotalCargos="0.00"/>
</aerolineas:Aerolineas>"#;
    let err = cadena(empty_cargos).unwrap_err();
    assert!(matches!(
        err,
        EngineError::RequiredChildMissing { ref element, ref child }
            if element == "OtrosCargos" && child == "Cargo"
    ));
}

#[test]
fn test_optional_child_elided_entirely() {
    // OtrosCargos is optional; without it the whole sub-segment disappears
    let no_cargos = r#"<aerolineas:Aerolineas xmlns:aerolineas="http://www.sat.gob.mx/aerolineas" Version="1.0" TUA="123.45"/>"#;
    assert_eq!(cadena(no_cargos).unwrap(), "|1.0|123.45|");
}

#[test]
fn test_optional_attribute_omission_keeps_delimiter_count() {
    let with_serie = r#"<vehiculousado:VehiculoUsado xmlns:vehiculousado="http://www.sat.gob.mx/vehiculousado"
  Version="1.0" montoAdquisicion="100000.00" montoEnajenacion="120000.00"
  claveVehicular="0033344" marca="Ford" tipo="Sedan" modelo="2010"
  numeroMotor="ABC123" numeroSerie="3N1BC13E88L354421" NIV="N987" valor="130000.00"/>"#;
    let without_serie = r#"<vehiculousado:VehiculoUsado xmlns:vehiculousado="http://www.sat.gob.mx/vehiculousado"
  Version="1.0" montoAdquisicion="100000.00" montoEnajenacion="120000.00"
  claveVehicular="0033344" marca="Ford" tipo="Sedan" modelo="2010"
  numeroMotor="ABC123" NIV="N987" valor="130000.00"/>"#;

    let full = cadena(with_serie).unwrap();
    let omitted = cadena(without_serie).unwrap();

    assert_eq!(full, "|1.0|100000.00|120000.00|0033344|Ford|Sedan|2010|ABC123|3N1BC13E88L354421|N987|130000.00|");
    assert_eq!(omitted, "|1.0|100000.00|120000.00|0033344|Ford|Sedan|2010|ABC123||N987|130000.00|");

    let delimiters = |s: &str| s.matches('|').count();
    assert_eq!(delimiters(&full), delimiters(&omitted));
}

#[test]
fn test_repeated_children_follow_document_order() {
    let swapped = r#"<aerolineas:Aerolineas xmlns:aerolineas="http://www.sat.gob.mx/aerolineas" Version="1.0" TUA="123.45">
  <aerolineas:OtrosCargos TotalCargos="50.00">
    <aerolineas:Cargo CodigoCargo="B" Importe="40.00"/>
    <aerolineas:Cargo CodigoCargo="A" Importe="10.00"/>
  </aerolineas:OtrosCargos>
</aerolineas:Aerolineas>"#;
    // Never sorted by code: segments move with the document
    assert_eq!(cadena(swapped).unwrap(), "|1.0|123.45|50.00|B|40.00|A|10.00|");
}

#[test]
fn test_nested_repeated_structure() {
    let ecc11 = r#"<ecc:EstadoDeCuentaCombustible xmlns:ecc="http://www.sat.gob.mx/EstadoDeCuentaCombustible"
  Version="1.1" TipoOperacion="Tarjeta" NumeroDeCuenta="800000000509" SubTotal="1400.00" Total="1600.00">
  <ecc:Conceptos>
    <ecc:ConceptoEstadoDeCuentaCombustible Identificador="1234" Fecha="2016-07-15T09:30:00"
      Rfc="COM860602ABC" ClaveEstacion="2429" Cantidad="100.00" TipoCombustible="Magna"
      Unidad="Litro" NombreCombustible="Magna" FolioOperacion="988"
      ValorUnitario="14.00" Importe="1400.00">
      <ecc:Traslados>
        <ecc:Traslado Impuesto="IVA" TasaOCuota="0.16" Importe="224.00"/>
      </ecc:Traslados>
    </ecc:ConceptoEstadoDeCuentaCombustible>
  </ecc:Conceptos>
</ecc:EstadoDeCuentaCombustible>"#;
    assert_eq!(
        cadena(ecc11).unwrap(),
        "|1.1|Tarjeta|800000000509|1400.00|1600.00|1234|2016-07-15T09:30:00|COM860602ABC|2429|100.00|Magna|Litro|Magna|988|14.00|1400.00|IVA|0.16|224.00|"
    );
}

#[test]
fn test_version_selects_rule_set_shape() {
    // Same root element name, different declared version (and namespace):
    // the 1.2 revision drops Unidad and orders TipoCombustible before
    // Cantidad, so the same data canonicalizes to a different shape
    let ecc12 = r#"<ecc12:EstadoDeCuentaCombustible xmlns:ecc12="http://www.sat.gob.mx/EstadoDeCuentaCombustible12"
  Version="1.2" TipoOperacion="Tarjeta" NumeroDeCuenta="800000000509" SubTotal="1400.00" Total="1600.00">
  <ecc12:Conceptos>
    <ecc12:ConceptoEstadoDeCuentaCombustible Identificador="1234" Fecha="2016-07-15T09:30:00"
      Rfc="COM860602ABC" ClaveEstacion="2429" Cantidad="100.00" TipoCombustible="Magna"
      NombreCombustible="Magna" FolioOperacion="988" ValorUnitario="14.00" Importe="1400.00">
      <ecc12:Traslados>
        <ecc12:Traslado Impuesto="IVA" TasaOCuota="0.16" Importe="224.00"/>
      </ecc12:Traslados>
    </ecc12:ConceptoEstadoDeCuentaCombustible>
  </ecc12:Conceptos>
</ecc12:EstadoDeCuentaCombustible>"#;
    assert_eq!(
        cadena(ecc12).unwrap(),
        "|1.2|Tarjeta|800000000509|1400.00|1600.00|1234|2016-07-15T09:30:00|COM860602ABC|2429|Magna|100.00|Magna|988|14.00|1400.00|IVA|0.16|224.00|"
    );
}

#[test]
fn test_optional_present_but_empty_matches_absent_output() {
    // Open question pinned down: presence-based semantics mean an optional
    // attribute that is present-but-empty emits an empty-valued token, which
    // is byte-identical in the cadena to the absent case
    let empty_norma = r#"<ley:LeyendasFiscales xmlns:ley="http://www.sat.gob.mx/leyendasFiscales" version="1.0">
  <ley:Leyenda norma="" textoLeyenda="Producto importado"/>
</ley:LeyendasFiscales>"#;
    let absent_norma = r#"<ley:LeyendasFiscales xmlns:ley="http://www.sat.gob.mx/leyendasFiscales" version="1.0">
  <ley:Leyenda textoLeyenda="Producto importado"/>
</ley:LeyendasFiscales>"#;
    assert_eq!(cadena(empty_norma).unwrap(), "|1.0|||Producto importado|");
    assert_eq!(cadena(empty_norma).unwrap(), cadena(absent_norma).unwrap());
}

#[test]
fn test_version_mismatch_fails_resolution() {
    let unknown_version = r#"<ley:LeyendasFiscales xmlns:ley="http://www.sat.gob.mx/leyendasFiscales" version="2.0">
  <ley:Leyenda textoLeyenda="x"/>
</ley:LeyendasFiscales>"#;
    assert!(matches!(
        cadena(unknown_version).unwrap_err(),
        EngineError::SchemaNotFound { ref version, .. } if version == "2.0"
    ));
}

#[test]
fn test_divisas_flat_complement() {
    let divisas = r#"<divisas:Divisas xmlns:divisas="http://www.sat.gob.mx/divisas" Version="1.0" TipoOperacion="venta"/>"#;
    assert_eq!(cadena(divisas).unwrap(), "|1.0|venta|");
}

#[test]
fn test_digest_of_cadena() {
    let cadena = cadena(LEYENDAS).unwrap();
    assert_eq!(
        cadena_digest(&cadena),
        "3fc54fd0a4646f4dcb4c1095975590ad0ef8fbb8df1fd388060c3ea25cef3b16"
    );
}

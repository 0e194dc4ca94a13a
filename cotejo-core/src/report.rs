//! Markdown rendering of the comparative price map
//!
//! The formatter consumes the aggregator's output contract and nothing
//! else: it does not know how groups were computed, only how to lay them
//! out. Output is a single Markdown blob suitable for direct file export.

use std::collections::BTreeSet;
use std::fmt::{self, Write};

use rust_decimal::Decimal;

use cotejo_math::{format_currency, valor_por_extenso};

use crate::aggregate::total_budget;
use crate::item::GroupedProduct;

/// Options controlling the rendered report
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Document title, first heading of the report
    pub title: String,
    /// Normative reference the quotation answers to
    pub decree: String,
    /// Free-text description of what is being quoted
    pub description: String,
    /// Whether to append the four-section technical narrative
    pub include_technical_narrative: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "MAPA COMPARATIVO DE PREÇOS - COTAÇÃO AUTOMÁTICA".to_string(),
            decree: "Decreto nº 779, de 15 de março de 2024 - Estado de Mato Grosso".to_string(),
            description: "Cotação automática de produtos de escritório".to_string(),
            include_technical_narrative: true,
        }
    }
}

/// Render the full report to a string.
pub fn render_report(groups: &[GroupedProduct], options: &ReportOptions) -> String {
    let mut output = String::new();
    write_report(&mut output, groups, options).expect("writing to string");
    output
}

/// Write the report into any `fmt::Write` sink.
///
/// Column order is the lexicographically sorted set of distinct sources
/// across all groups; rows keep the aggregator's first-seen product
/// order. An empty group list still produces a well-formed header, table
/// scaffold and a zero total row.
pub fn write_report(
    writer: &mut impl Write,
    groups: &[GroupedProduct],
    options: &ReportOptions,
) -> fmt::Result {
    let sources = collect_sources(groups);

    writeln!(writer, "# {}", options.title)?;
    writeln!(writer)?;
    writeln!(writer, "{}", options.description)?;
    writeln!(writer)?;
    writeln!(writer, "{}", options.decree)?;
    writeln!(writer)?;

    // fixed columns around one column per sorted source
    write!(writer, "| **Item** | **Quantidade solicitada** |")?;
    for source in &sources {
        write!(writer, " **{}** |", source)?;
    }
    writeln!(writer, " **Média** | **Valor Total** |")?;

    write!(writer, "| --- | --- |")?;
    for _ in &sources {
        write!(writer, " --- |")?;
    }
    writeln!(writer, " --- | --- |")?;

    for group in groups {
        write!(writer, "| {} | {} |", group.product_name, group.quantity)?;
        for source in &sources {
            match group.price_for_source(source) {
                Some(observation) => write!(writer, " {} |", format_currency(observation.price))?,
                None => write!(writer, " - |")?,
            }
        }
        writeln!(
            writer,
            " {} | {} |",
            format_currency(group.average_price),
            format_currency(group.total_value)
        )?;
    }

    let columns = sources.len() + 4;
    let total = total_budget(groups);

    // spacer row, then the grand total in the last cell
    writeln!(writer, "|{}", " |".repeat(columns))?;
    write!(writer, "| **Valor Total Aquisição** |")?;
    for _ in 0..columns - 2 {
        write!(writer, " |")?;
    }
    writeln!(writer, " **{}** |", format_currency(total))?;

    if options.include_technical_narrative {
        write_narrative(writer, &sources, total, options)?;
    }

    Ok(())
}

/// Distinct sources across all observations, sorted ascending
fn collect_sources(groups: &[GroupedProduct]) -> Vec<&str> {
    let mut sources = BTreeSet::new();
    for group in groups {
        for observation in &group.prices {
            sources.insert(observation.source.as_str());
        }
    }
    sources.into_iter().collect()
}

/// The fixed four-section technical narrative appended to the report
fn write_narrative(
    writer: &mut impl Write,
    sources: &[&str],
    total: Decimal,
    options: &ReportOptions,
) -> fmt::Result {
    writeln!(writer)?;
    writeln!(writer, "**RELATÓRIO TÉCNICO COTAÇÃO DE PREÇOS**")?;
    writeln!(writer)?;

    writeln!(
        writer,
        "**1. Identificação:** Pesquisa de preços realizada para aquisição de materiais, \
         utilizando as fontes {}, em conformidade com o {}, que disciplina a pesquisa de \
         preços no âmbito da Administração Pública.",
        sources.join(", "),
        options.decree
    )?;
    writeln!(writer)?;

    writeln!(
        writer,
        "**2. Metodologia:** A pesquisa foi conduzida por meio da plataforma Cotejo, que \
         coletou automaticamente os valores unitários das bases públicas, estruturando-os \
         em mapa comparativo de preços. A ferramenta também calculou as médias por item e \
         o valor total estimado da compra, permitindo ao servidor responsável selecionar o \
         valor aplicado de acordo com a análise técnica e os princípios de economicidade e \
         razoabilidade."
    )?;
    writeln!(writer)?;

    writeln!(
        writer,
        "**3. Análise Técnica:** Foram avaliadas a consistência e a variação dos preços \
         entre as fontes consultadas. O valor de referência foi estabelecido com base na \
         média aritmética simples dos preços coletados, refletindo a realidade do mercado \
         e representando uma opção economicamente vantajosa, sem prejuízo à qualidade dos \
         bens a serem adquiridos."
    )?;
    writeln!(writer)?;

    writeln!(
        writer,
        "**4. Conclusão:** Diante do exposto, define-se como **valor final aplicado da \
         cotação** o montante de **{}** ({}), com base na pesquisa realizada. A presente \
         pesquisa poderá ser utilizada para instruir o processo de contratação, \
         observando-se os princípios da legalidade, eficiência, economicidade e \
         transparência.",
        format_currency(total),
        valor_por_extenso(total)
    )?;
    writeln!(writer)?;

    writeln!(writer, "Gerado automaticamente pela plataforma **Cotejo**.")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ReportOptions::default();
        assert_eq!(options.title, "MAPA COMPARATIVO DE PREÇOS - COTAÇÃO AUTOMÁTICA");
        assert!(options.include_technical_narrative);
    }

    #[test]
    fn test_collect_sources_sorted_and_distinct() {
        use crate::item::PriceObservation;
        use rust_decimal_macros::dec;

        let observation = |source: &str| PriceObservation {
            source: source.to_string(),
            price: dec!(1.00),
            supplier: "X".to_string(),
        };
        let group = |sources: &[&str]| GroupedProduct {
            product_name: "P".to_string(),
            quantity: 1,
            prices: sources.iter().map(|s| observation(s)).collect(),
            average_price: dec!(1.00),
            total_value: dec!(1.00),
        };

        let groups = vec![group(&["Radar TCE", "PNCP"]), group(&["PNCP", "Nota MT"])];
        assert_eq!(collect_sources(&groups), ["Nota MT", "PNCP", "Radar TCE"]);
    }
}

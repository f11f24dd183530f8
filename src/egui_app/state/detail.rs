/// Edit buffers for the detail panel.
///
/// The controller copies the selected row into these buffers on every
/// selection change and writes them back on every edit. After a removal the
/// buffers deliberately keep the removed row's values until the user selects
/// something else.
#[derive(Clone, Debug, Default)]
pub struct DetailPanelState {
    pub name: String,
    pub chemical_symbol: String,
    pub notes: String,
}

//! HTML snapshot of a dashboard view with D3.js charts

use crate::dashboard::DashboardView;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, view: &DashboardView) -> io::Result<()> {
    let json_data = build_json_data(view)?;
    let (year_min, year_max) = view.controls.year_range;
    let types: Vec<&str> = view.controls.types.iter().map(|t| t.as_str()).collect();
    let types = if types.is_empty() { "none".to_string() } else { types.join(", ") };
    let search = if view.search.is_empty() {
        String::new()
    } else {
        format!(" · search \"{}\"", html_escape(&view.search))
    };

    // Write the full HTML document
    write!(writer, r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Netflix Content Analysis</title>
    <script src="https://d3js.org/d3.v7.min.js"></script>
    <style>
        :root {{
            --bg: #0d1117;
            --card: #161b22;
            --border: #30363d;
            --text: #e6edf3;
            --dim: #7d8590;
            --accent: #e50914;
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }}
        .container {{ max-width: 1600px; margin: 0 auto; padding: 2rem; }}
        .header {{ margin-bottom: 1.5rem; padding-bottom: 1rem; border-bottom: 1px solid var(--border); }}
        .logo {{ font-size: 2.25rem; font-weight: 800; color: var(--accent); }}
        .subtitle {{ color: var(--dim); }}

        .stats {{
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1rem;
            margin-bottom: 2rem;
        }}
        .stat {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
            text-align: center;
        }}
        .stat-value {{ font-size: 3rem; font-weight: 700; line-height: 1; }}
        .stat-label {{ color: var(--dim); font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; margin-top: 0.5rem; }}

        .charts {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1.5rem;
            margin-bottom: 2rem;
        }}
        .chart-card {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
            min-height: 360px;
        }}
        .chart-title {{ font-size: 1rem; font-weight: 600; margin-bottom: 1rem; color: var(--dim); }}
        .empty {{ color: var(--dim); text-align: center; padding-top: 6rem; }}

        .table-container {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            overflow: auto;
        }}
        table {{ width: 100%; border-collapse: collapse; font-size: 0.85rem; }}
        th, td {{ padding: 0.6rem 0.8rem; text-align: left; border-bottom: 1px solid var(--border); }}
        th {{
            background: rgba(255,255,255,0.03);
            font-size: 0.7rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            color: var(--dim);
        }}
        td.long {{ max-width: 320px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }}

        .footer {{
            margin-top: 2rem;
            padding-top: 1rem;
            border-top: 1px solid var(--border);
            color: var(--dim);
            font-size: 0.875rem;
            text-align: center;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div class="logo">🎬 Netflix Content Analysis</div>
            <div class="subtitle">Types: {types} · Release years {year_min}–{year_max}{search}</div>
        </div>

        <div class="stats">
            <div class="stat">
                <div class="stat-value">{total}</div>
                <div class="stat-label">Total Titles</div>
            </div>
            <div class="stat">
                <div class="stat-value">{movies}</div>
                <div class="stat-label">Movies</div>
            </div>
            <div class="stat">
                <div class="stat-value">{tv_shows}</div>
                <div class="stat-label">TV Shows</div>
            </div>
        </div>

        <div class="charts">
            <div class="chart-card"><div class="chart-title">{types_title}</div><div id="chart-types"></div></div>
            <div class="chart-card"><div class="chart-title">{genres_title}</div><div id="chart-genres"></div></div>
            <div class="chart-card"><div class="chart-title">{countries_title}</div><div id="chart-countries"></div></div>
            <div class="chart-card"><div class="chart-title">{growth_title}</div><div id="chart-growth"></div></div>
        </div>

        <div class="table-container">
            <table>
                <thead><tr id="table-head"></tr></thead>
                <tbody id="table-body"></tbody>
            </table>
        </div>

        <div class="footer">Generated by flixdash</div>
    </div>

    <script>
    const data = {json_data};

    const COLUMNS = ['show_id', 'type', 'title', 'director', 'cast', 'country', 'date_added',
                     'release_year', 'rating', 'duration', 'listed_in', 'description', 'year_added'];
    const LONG_COLUMNS = new Set(['cast', 'description', 'listed_in']);
    const PIE_COLORS = ['#b2182b', '#2166ac'];

    function canvas(selector, panel, margin) {{
        const container = document.querySelector(selector);
        if (panel.points.length === 0) {{
            container.innerHTML = '<div class="empty">No data for these filters</div>';
            return null;
        }}
        const width = container.clientWidth - margin.left - margin.right;
        const height = 320 - margin.top - margin.bottom;
        const g = d3.select(container).append('svg')
            .attr('width', width + margin.left + margin.right)
            .attr('height', height + margin.top + margin.bottom)
            .append('g')
            .attr('transform', `translate(${{margin.left}},${{margin.top}})`);
        return {{ g, width, height }};
    }}

    // Donut Chart
    function drawTypeDonut() {{
        const panel = data.charts.type_distribution;
        const c = canvas('#chart-types', panel, {{ top: 10, right: 10, bottom: 10, left: 10 }});
        if (!c) return;

        const radius = Math.min(c.width, c.height) / 2;
        const g = c.g.append('g').attr('transform', `translate(${{c.width/2}},${{c.height/2}})`);
        const pie = d3.pie().value(d => d.value).sort(null);
        const arc = d3.arc().innerRadius(radius * 0.4).outerRadius(radius * 0.9);

        g.selectAll('path').data(pie(panel.points)).enter().append('path')
            .attr('d', arc)
            .attr('fill', (d, i) => PIE_COLORS[i % PIE_COLORS.length])
            .attr('stroke', '#0d1117')
            .attr('stroke-width', 2);

        g.selectAll('text').data(pie(panel.points)).enter().append('text')
            .attr('transform', d => `translate(${{arc.centroid(d)}})`)
            .attr('text-anchor', 'middle')
            .style('fill', '#fff')
            .text(d => `${{d.data.label}} (${{d.data.value}})`);
    }}

    // Top genres, largest bar on top
    function drawGenreBars() {{
        const panel = data.charts.top_genres;
        const c = canvas('#chart-genres', panel, {{ top: 10, right: 30, bottom: 30, left: 180 }});
        if (!c) return;

        const max = d3.max(panel.points, d => d.value);
        const y = d3.scaleBand().domain(panel.points.map(d => d.label).reverse()).range([0, c.height]).padding(0.15);
        const x = d3.scaleLinear().domain([0, max]).nice().range([0, c.width]);
        const color = d3.scaleSequential(d3.interpolateReds).domain([0, max]);

        c.g.selectAll('rect').data(panel.points).enter().append('rect')
            .attr('y', d => y(d.label)).attr('height', y.bandwidth())
            .attr('x', 0).attr('width', d => x(d.value))
            .attr('fill', d => color(d.value));

        c.g.append('g').call(d3.axisLeft(y)).style('color', '#7d8590');
        c.g.append('g').attr('transform', `translate(0,${{c.height}})`).call(d3.axisBottom(x).ticks(5)).style('color', '#7d8590');
    }}

    // Top countries
    function drawCountryBars() {{
        const panel = data.charts.top_countries;
        const c = canvas('#chart-countries', panel, {{ top: 10, right: 20, bottom: 90, left: 50 }});
        if (!c) return;

        const max = d3.max(panel.points, d => d.value);
        const x = d3.scaleBand().domain(panel.points.map(d => d.label)).range([0, c.width]).padding(0.2);
        const y = d3.scaleLinear().domain([0, max]).nice().range([c.height, 0]);
        const color = d3.scaleSequential(d3.interpolateViridis).domain([0, max]);

        c.g.selectAll('rect').data(panel.points).enter().append('rect')
            .attr('x', d => x(d.label)).attr('width', x.bandwidth())
            .attr('y', d => y(d.value)).attr('height', d => c.height - y(d.value))
            .attr('fill', d => color(d.value));

        c.g.append('g').attr('transform', `translate(0,${{c.height}})`).call(d3.axisBottom(x))
            .style('color', '#7d8590')
            .selectAll('text').attr('transform', 'rotate(-35)').style('text-anchor', 'end');
        c.g.append('g').call(d3.axisLeft(y).ticks(5)).style('color', '#7d8590');
    }}

    // Titles added per year
    function drawGrowthArea() {{
        const panel = data.charts.growth;
        const c = canvas('#chart-growth', panel, {{ top: 10, right: 20, bottom: 30, left: 50 }});
        if (!c) return;

        const points = panel.points.map(d => ({{ year: +d.label, value: d.value }}));
        const x = d3.scaleLinear().domain(d3.extent(points, d => d.year)).range([0, c.width]);
        const y = d3.scaleLinear().domain([0, d3.max(points, d => d.value)]).nice().range([c.height, 0]);
        const area = d3.area().curve(d3.curveMonotoneX).x(d => x(d.year)).y0(c.height).y1(d => y(d.value));

        c.g.append('path').datum(points).attr('d', area).attr('fill', '#E50914').attr('fill-opacity', 0.4)
            .attr('stroke', '#E50914').attr('stroke-width', 2);

        c.g.append('g').attr('transform', `translate(0,${{c.height}})`)
            .call(d3.axisBottom(x).ticks(Math.min(points.length, 10)).tickFormat(d3.format('d')))
            .style('color', '#7d8590');
        c.g.append('g').call(d3.axisLeft(y).ticks(5)).style('color', '#7d8590');
    }}

    // Build table
    function buildTable() {{
        document.getElementById('table-head').innerHTML = COLUMNS.map(c => `<th>${{c}}</th>`).join('');
        const tbody = document.getElementById('table-body');
        data.table.rows.forEach(row => {{
            const tr = document.createElement('tr');
            COLUMNS.forEach(c => {{
                const td = document.createElement('td');
                td.textContent = row[c] === null || row[c] === undefined ? '' : row[c];
                if (LONG_COLUMNS.has(c)) {{
                    td.className = 'long';
                    td.title = td.textContent;
                }}
                tr.appendChild(td);
            }});
            tbody.appendChild(tr);
        }});
    }}

    // Initialize
    drawTypeDonut();
    drawGenreBars();
    drawCountryBars();
    drawGrowthArea();
    buildTable();
    </script>
</body>
</html>
"#,
        types = html_escape(&types),
        year_min = year_min,
        year_max = year_max,
        search = search,
        total = view.metrics.total,
        movies = view.metrics.movies,
        tv_shows = view.metrics.tv_shows,
        types_title = view.charts.type_distribution.title,
        genres_title = view.charts.top_genres.title,
        countries_title = view.charts.top_countries.title,
        growth_title = view.charts.growth.title,
        json_data = json_data
    )?;

    Ok(())
}

/// View as JSON, safe to drop inside a `<script>` element
fn build_json_data(view: &DashboardView) -> io::Result<String> {
    let json = serde_json::to_string(view)?;
    Ok(json.replace("</", "<\\/"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
